//! Shared test utilities for the integration suite.
//!
//! Import via `#[path]` from the suite's main.rs.

#![allow(dead_code)]

use docstore::{Database, DocstoreConfig, Document, Value};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGING: Once = Once::new();

/// Route `tracing` output through the test harness (shown with --nocapture).
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Test database wrapper that owns its data directory.
pub struct TestDb {
    pub db: Arc<Database>,
    pub dir: TempDir,
}

impl TestDb {
    /// Disk-backed database in a fresh temp dir.
    pub fn new() -> Self {
        init_logging();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db = Database::open(dir.path()).expect("Failed to create test database");
        TestDb {
            db: Arc::new(db),
            dir,
        }
    }

    /// Disk-backed database with relaxed durability, for bulk tests.
    pub fn new_fast() -> Self {
        init_logging();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DocstoreConfig {
            durability: "none".to_string(),
            ..DocstoreConfig::default()
        };
        let db = Database::open_with_config(dir.path(), config)
            .expect("Failed to create test database");
        TestDb {
            db: Arc::new(db),
            dir,
        }
    }

    /// Close the current handle and open the same directory again.
    pub fn reopen(&mut self) {
        self.db.close().expect("close");
        let db = Database::open(self.dir.path()).expect("reopen");
        self.db = Arc::new(db);
    }
}

/// In-memory database.
pub fn ephemeral() -> Database {
    init_logging();
    Database::ephemeral().expect("Failed to create ephemeral database")
}

/// Build a document from field/value pairs.
pub fn doc(pairs: &[(&str, Value)]) -> Document {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
