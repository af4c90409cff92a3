// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_in_memory_database_initializes() {
    let result: Result<SqlitePersistence, PersistenceError> = SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut second: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    first.create_employee("alice", None, None).unwrap();

    assert!(first.find_employee_id_by_username("alice").unwrap().is_some());
    assert!(second.find_employee_id_by_username("alice").unwrap().is_none());
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "tender_bid_init_{}.db",
        uuid::Uuid::new_v4().simple()
    ));

    {
        let mut persistence: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence.create_employee("alice", None, None).unwrap();
    }

    let mut reopened: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
    assert!(
        reopened
            .find_employee_id_by_username("alice")
            .unwrap()
            .is_some()
    );

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[test]
fn test_duplicate_username_is_rejected() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.create_employee("alice", None, None).unwrap();
    let result = persistence.create_employee("alice", None, None);
    assert!(matches!(result, Err(PersistenceError::QueryFailed(_))));
}
