//! Open, close, reopen and configuration.

use crate::common::*;
use docstore::{Database, DocstoreConfig, Error, Filter, Value, CONFIG_FILE_NAME};
use std::sync::Arc;

#[test]
fn test_records_persist_across_reopen() {
    let mut test_db = TestDb::new();
    let id = test_db
        .db
        .insert("users", &doc(&[("name", Value::from("Ada")), ("age", Value::Int(37))]))
        .unwrap();

    test_db.reopen();

    let records = test_db.db.select("users", &Filter::new()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].get("age"), Some(&Value::Int(37)));
}

#[test]
fn test_empty_collection_persists_across_reopen() {
    let mut test_db = TestDb::new();
    test_db.db.create_collection("users").unwrap();
    test_db.reopen();
    assert_eq!(test_db.db.count("users").unwrap(), 0);
}

#[test]
fn test_operations_after_close_fail() {
    let test_db = TestDb::new();
    let db = &test_db.db;
    db.insert("users", &doc(&[("n", Value::Int(1))])).unwrap();
    db.close().unwrap();

    assert!(db.is_closed());
    assert!(matches!(db.select("users", &Filter::new()), Err(Error::StoreClosed)));
    assert!(matches!(
        db.insert("users", &doc(&[("n", Value::Int(2))])),
        Err(Error::StoreClosed)
    ));
    assert!(matches!(db.create_collection("x"), Err(Error::StoreClosed)));
    assert!(matches!(db.close(), Err(Error::StoreClosed)));
}

#[test]
fn test_ephemeral_data_is_not_shared() {
    let a = ephemeral();
    let b = ephemeral();
    a.insert("users", &doc(&[("n", Value::Int(1))])).unwrap();
    assert!(matches!(
        b.select("users", &Filter::new()),
        Err(Error::CollectionNotFound(_))
    ));
}

#[test]
fn test_default_config_file_written() {
    let test_db = TestDb::new();
    let path = test_db.dir.path().join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("durability = \"immediate\""));
    assert_eq!(test_db.db.config(), &DocstoreConfig::default());
}

#[test]
fn test_relaxed_durability_still_reads_back() {
    let mut test_db = TestDb::new_fast();
    assert_eq!(test_db.db.config().durability, "none");
    test_db
        .db
        .insert("users", &doc(&[("n", Value::Int(1))]))
        .unwrap();
    assert_eq!(test_db.db.count("users").unwrap(), 1);

    test_db.reopen();
    assert_eq!(test_db.db.config().durability, "none");
}

#[test]
fn test_invalid_config_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = DocstoreConfig {
        durability: "sometimes".to_string(),
        ..DocstoreConfig::default()
    };
    assert!(matches!(
        Database::open_with_config(dir.path(), config),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_close_applies_to_shared_handles() {
    let test_db = TestDb::new();
    let db = Arc::clone(&test_db.db);
    db.insert("users", &doc(&[("n", Value::Int(1))])).unwrap();
    test_db.db.close().unwrap();
    assert!(matches!(db.count("users"), Err(Error::StoreClosed)));
}
