// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::db::{BatchStore, BatchStoreExt, DbOp};

pub fn write<DB>(db: &DB)
where
    DB: BatchStore,
{
    db.write_bin(b"1", &[1]).unwrap();
}

pub fn read<DB>(db: &DB)
where
    DB: BatchStore,
{
    let key = b"0";
    let value = [1];
    db.write_bin(key, &value).unwrap();
    let res = db.read_bin(key).unwrap().unwrap();
    assert_eq!(value.as_ref(), res.as_slice());

    // ensure that we are able to overwrite the value
    let value = [2, 3];
    db.write_bin(key, &value).unwrap();
    let res = db.read_bin(key).unwrap().unwrap();
    assert_eq!(value.as_ref(), res.as_slice());
}

pub fn exists<DB>(db: &DB)
where
    DB: BatchStore,
{
    let key = b"0";
    db.write_bin(key, &[1]).unwrap();
    assert!(db.exists(key).unwrap());
}

pub fn does_not_exist<DB>(db: &DB)
where
    DB: BatchStore,
{
    let key = b"Azathoth";
    assert!(!db.exists(key).unwrap());
    assert!(db.read_bin(key).unwrap().is_none());
}

pub fn delete<DB>(db: &DB)
where
    DB: BatchStore,
{
    let key = b"Nyarlathotep";
    db.write_bin(key, &[1]).unwrap();
    db.delete(key).unwrap();
    assert!(!db.exists(key).unwrap());
    // deleting a missing key is not an error
    db.delete(key).unwrap();
}

pub fn batch_commit<DB>(db: &DB)
where
    DB: BatchStore,
{
    db.write_bin(b"stale", &[0]).unwrap();
    let ops = (0u8..10)
        .map(|i| DbOp::Put(vec![b'k', i], vec![i]))
        .chain(std::iter::once(DbOp::Delete(b"stale".to_vec())))
        .collect::<Vec<_>>();
    db.commit(ops).unwrap();

    for i in 0u8..10 {
        assert_eq!(db.read_bin(&[b'k', i]).unwrap(), Some(vec![i]));
    }
    assert!(!db.exists(b"stale").unwrap());
}

pub fn later_ops_win<DB>(db: &DB)
where
    DB: BatchStore,
{
    db.commit(vec![
        DbOp::Put(b"key".to_vec(), vec![1]),
        DbOp::Delete(b"key".to_vec()),
        DbOp::Put(b"key".to_vec(), vec![2]),
    ])
    .unwrap();
    assert_eq!(db.read_bin(b"key").unwrap(), Some(vec![2]));
}

pub fn prefix_scan<DB>(db: &DB)
where
    DB: BatchStore,
{
    db.write_bin(b"/checkpoints/1", &[1]).unwrap();
    db.write_bin(b"/checkpoints/2", &[2]).unwrap();
    db.write_bin(b"/checkpointz", &[3]).unwrap();
    db.write_bin(b"/other/1", &[4]).unwrap();

    let mut entries = db.entries_with_prefix(b"/checkpoints/").unwrap();
    entries.sort();
    assert_eq!(
        entries,
        vec![
            (b"/checkpoints/1".to_vec(), vec![1]),
            (b"/checkpoints/2".to_vec(), vec![2]),
        ]
    );
    assert!(db.entries_with_prefix(b"/missing/").unwrap().is_empty());
}
