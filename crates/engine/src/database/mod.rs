//! Database struct and open/close logic
//!
//! This module provides the Database facade that orchestrates:
//! - Data directory and `docstore.toml` handling
//! - Engine opening (file-backed or in-memory)
//! - Collection creation, record insert, and queries
//! - Close, after which every operation fails with `StoreClosed`
//!
//! ## Transactions
//!
//! Every public operation runs in exactly one engine transaction and either
//! commits or aborts before returning. Writers are serialized by the
//! engine; readers work on a snapshot.

pub mod config;

pub use config::{DocstoreConfig, CONFIG_FILE_NAME, DATA_FILE_NAME};

use crate::{query, records};
use docstore_core::{Collection, Document, Error, Filter, Record, RecordId, Result};
use docstore_storage::Store;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Embedded document database
///
/// Create a database with [`Database::open`] (on disk) or
/// [`Database::ephemeral`] (in memory).
///
/// # Example
///
/// ```text
/// use docstore_engine::Database;
/// use docstore_core::{Document, Filter, Value};
///
/// let db = Database::open("/path/to/data")?;
/// db.create_collection("users")?;
///
/// let mut doc = Document::new();
/// doc.insert("name".into(), Value::from("Ada"));
/// let id = db.insert("users", &doc)?;
///
/// let active = db.select("users", &Filter::new().eq("name", "Ada"))?;
/// db.close()?;
/// ```
///
/// # Thread Safety
///
/// `Database` is `Send + Sync`. Share it with `Arc`. `close` waits for
/// operations already running on other threads.
pub struct Database {
    /// Data directory path (None for ephemeral databases)
    data_dir: Option<PathBuf>,

    /// Effective configuration
    config: DocstoreConfig,

    /// Engine handle; None once closed
    store: RwLock<Option<Store>>,
}

impl Database {
    /// Open a database in `path`, creating the directory if needed
    ///
    /// Settings come from `docstore.toml` in the directory. A commented
    /// default file is written on first open.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        DocstoreConfig::write_default_if_missing(&config_path)?;
        let config = DocstoreConfig::from_file(&config_path)?;

        Self::open_dir(data_dir, config)
    }

    /// Open a database in `path` with an explicit configuration
    ///
    /// The configuration is written to `docstore.toml`, replacing any
    /// existing file.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: DocstoreConfig) -> Result<Self> {
        config.store_options()?;
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;
        config.write_to_file(&data_dir.join(CONFIG_FILE_NAME))?;

        Self::open_dir(data_dir, config)
    }

    /// Open a database that keeps everything in memory
    ///
    /// No files are created. Data is lost when the database is closed or
    /// dropped.
    pub fn ephemeral() -> Result<Self> {
        let config = DocstoreConfig::default();
        let store = Store::in_memory(config.store_options()?)?;
        info!(target: "docstore::db", "Opened ephemeral database");
        Ok(Self {
            data_dir: None,
            config,
            store: RwLock::new(Some(store)),
        })
    }

    fn open_dir(data_dir: PathBuf, config: DocstoreConfig) -> Result<Self> {
        let store = Store::open(&data_dir.join(DATA_FILE_NAME), config.store_options()?)?;
        info!(
            target: "docstore::db",
            path = ?data_dir,
            durability = %config.durability,
            "Opened database"
        );
        Ok(Self {
            data_dir: Some(data_dir),
            config,
            store: RwLock::new(Some(store)),
        })
    }

    /// Data directory, or None for ephemeral databases
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Effective configuration
    pub fn config(&self) -> &DocstoreConfig {
        &self.config
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.store.read().is_none()
    }

    fn with_store<T>(&self, f: impl FnOnce(&Store) -> Result<T>) -> Result<T> {
        let guard = self.store.read();
        let store = guard.as_ref().ok_or(Error::StoreClosed)?;
        f(store)
    }

    /// Create a collection unless it exists
    ///
    /// Repeated calls with the same name return equal handles and never
    /// fail.
    pub fn create_collection(&self, name: &str) -> Result<Collection> {
        self.with_store(|store| store.update(|txn| records::create_collection(txn, name)))
    }

    /// Insert a record, creating the collection if needed
    ///
    /// All fields are written in one transaction. If any field is rejected
    /// nothing is written.
    pub fn insert(&self, collection: &str, doc: &Document) -> Result<RecordId> {
        self.with_store(|store| {
            store.update(|txn| {
                let fields = doc
                    .iter()
                    .map(|(name, value)| Ok::<_, Error>((name.as_str(), Cow::Borrowed(value))));
                records::insert(txn, collection, fields)
            })
        })
    }

    /// Insert a record given as a JSON object
    ///
    /// Field values must be strings, booleans, integers that fit in 32 bits,
    /// or floats. Anything else (null, arrays, nested objects, wide
    /// integers) fails the whole insert with `UnsupportedType` or
    /// `IntegerOutOfRange`.
    pub fn insert_json(&self, collection: &str, doc: &serde_json::Value) -> Result<RecordId> {
        self.with_store(|store| {
            store.update(|txn| records::insert(txn, collection, records::json_fields(doc)))
        })
    }

    /// Return the records of `collection` accepted by `filter`
    ///
    /// Fails with `CollectionNotFound` if the collection was never created.
    pub fn select(&self, collection: &str, filter: &Filter) -> Result<Vec<Record>> {
        self.with_store(|store| store.view(|txn| query::select(txn, collection, filter)))
    }

    /// Number of records in `collection`
    pub fn count(&self, collection: &str) -> Result<usize> {
        self.with_store(|store| store.view(|txn| query::count(txn, collection)))
    }

    /// All collections, ordered by name
    pub fn list_collections(&self) -> Result<Vec<Collection>> {
        self.with_store(|store| {
            store.view(|txn| {
                Ok(txn
                    .namespace_names()?
                    .into_iter()
                    .map(Collection::new)
                    .collect())
            })
        })
    }

    /// Release the engine handle
    ///
    /// Waits for in-flight operations. Every later call, including a second
    /// `close`, fails with `StoreClosed`.
    pub fn close(&self) -> Result<()> {
        let store = self.store.write().take().ok_or(Error::StoreClosed)?;
        drop(store);
        info!(target: "docstore::db", path = ?self.data_dir, "Closed database");
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("data_dir", &self.data_dir)
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .finish()
    }
}
