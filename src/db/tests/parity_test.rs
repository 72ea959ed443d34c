// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{db_utils::parity::TempParityDB, subtests};

#[test]
fn db_write() {
    let db = TempParityDB::new();
    subtests::write(&*db);
}

#[test]
fn db_read() {
    let db = TempParityDB::new();
    subtests::read(&*db);
}

#[test]
fn db_exists() {
    let db = TempParityDB::new();
    subtests::exists(&*db);
}

#[test]
fn db_does_not_exist() {
    let db = TempParityDB::new();
    subtests::does_not_exist(&*db);
}

#[test]
fn db_delete() {
    let db = TempParityDB::new();
    subtests::delete(&*db);
}

#[test]
fn db_batch_commit() {
    let db = TempParityDB::new();
    subtests::batch_commit(&*db);
}

#[test]
fn db_later_ops_win() {
    let db = TempParityDB::new();
    subtests::later_ops_win(&*db);
}

#[test]
fn db_prefix_scan() {
    let db = TempParityDB::new();
    subtests::prefix_scan(&*db);
}
