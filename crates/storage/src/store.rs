//! Store handle and transactions
//!
//! The store opens exactly one redb database, either file-backed or in
//! memory. Every public docstore operation runs inside one transaction
//! started here.
//!
//! ## Transaction API
//!
//! 1. **Closure API** (recommended): `store.update(|txn| { ... })` and
//!    `store.view(|txn| { ... })`
//!    - `update` commits on `Ok` and aborts on `Err`
//!    - Returns the closure's return value
//!
//! 2. **Manual API**: `begin_write()` + `commit()` / `abort()`
//!
//! Writers are serialized by the engine. Readers see a snapshot taken when
//! their transaction began.

use crate::error::storage_failure;
use crate::namespace::{Namespace, NamespaceMut};
use crate::options::StoreOptions;
use crate::tables::{CHILDREN, ENTRIES, NAMESPACES};
use docstore_core::Result;
use redb::backends::InMemoryBackend;
use redb::{Builder, Database, ReadableTable, TableError};
use std::path::Path;
use tracing::{debug, info, warn};

/// An open engine handle
pub struct Store {
    db: Database,
    options: StoreOptions,
}

impl Store {
    /// Open (or create) a file-backed store at `path`
    pub fn open(path: &Path, options: StoreOptions) -> Result<Self> {
        let db = Self::builder(&options)
            .create(path)
            .map_err(storage_failure)?;
        info!(
            target: "docstore::storage",
            path = ?path,
            durability = ?options.durability,
            "Opened file store"
        );
        Ok(Self { db, options })
    }

    /// Open a store that lives only in memory
    pub fn in_memory(options: StoreOptions) -> Result<Self> {
        let db = Self::builder(&options)
            .create_with_backend(InMemoryBackend::new())
            .map_err(storage_failure)?;
        info!(target: "docstore::storage", "Opened in-memory store");
        Ok(Self { db, options })
    }

    fn builder(options: &StoreOptions) -> Builder {
        let mut builder = Builder::new();
        if let Some(bytes) = options.cache_size_bytes {
            builder.set_cache_size(bytes);
        }
        builder
    }

    /// Options this store was opened with
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Start a write transaction
    pub fn begin_write(&self) -> Result<WriteTxn> {
        let mut txn = self.db.begin_write().map_err(storage_failure)?;
        txn.set_durability(self.options.durability.into());
        Ok(WriteTxn { txn })
    }

    /// Start a read-only snapshot transaction
    pub fn begin_read(&self) -> Result<ReadTxn> {
        let txn = self.db.begin_read().map_err(storage_failure)?;
        Ok(ReadTxn { txn })
    }

    /// Run `f` in a write transaction
    ///
    /// Commits if `f` returns `Ok`, aborts if it returns `Err`. Nothing `f`
    /// wrote is visible after an abort.
    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&WriteTxn) -> Result<T>,
    {
        let txn = self.begin_write()?;
        match f(&txn) {
            Ok(value) => {
                txn.commit()?;
                debug!(target: "docstore::txn", "Transaction committed");
                Ok(value)
            }
            Err(e) => {
                warn!(target: "docstore::txn", error = %e, "Transaction aborted");
                if let Err(abort_err) = txn.abort() {
                    warn!(target: "docstore::txn", error = %abort_err, "Abort failed");
                }
                Err(e)
            }
        }
    }

    /// Run `f` in a read transaction
    pub fn view<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ReadTxn) -> Result<T>,
    {
        let txn = self.begin_read()?;
        f(&txn)
    }
}

/// A write transaction
pub struct WriteTxn {
    txn: redb::WriteTransaction,
}

impl WriteTxn {
    /// Create a top-level namespace unless it exists
    ///
    /// Returns `true` if the namespace was created by this call.
    pub fn create_namespace_if_absent(&self, name: &str) -> Result<bool> {
        let created = {
            let mut namespaces = self.txn.open_table(NAMESPACES).map_err(storage_failure)?;
            let existing = namespaces.insert(name, ()).map_err(storage_failure)?;
            existing.is_none()
        };
        // Child tables must exist for readers of an empty namespace
        self.txn.open_table(CHILDREN).map_err(storage_failure)?;
        self.txn.open_table(ENTRIES).map_err(storage_failure)?;
        if created {
            debug!(target: "docstore::storage", namespace = name, "Created namespace");
        }
        Ok(created)
    }

    /// Open an existing top-level namespace for writing
    ///
    /// Returns `None` if the namespace does not exist.
    pub fn namespace(&self, name: &str) -> Result<Option<NamespaceMut<'_>>> {
        let exists = {
            let namespaces = self.txn.open_table(NAMESPACES).map_err(storage_failure)?;
            let found = namespaces.get(name).map_err(storage_failure)?;
            found.is_some()
        };
        if !exists {
            return Ok(None);
        }
        let children = self.txn.open_table(CHILDREN).map_err(storage_failure)?;
        let entries = self.txn.open_table(ENTRIES).map_err(storage_failure)?;
        Ok(Some(NamespaceMut::new(name, children, entries)))
    }

    /// Make every write of this transaction durable and visible
    pub fn commit(self) -> Result<()> {
        self.txn.commit().map_err(storage_failure)
    }

    /// Discard every write of this transaction
    pub fn abort(self) -> Result<()> {
        self.txn.abort().map_err(storage_failure)
    }
}

/// A read-only snapshot transaction
pub struct ReadTxn {
    txn: redb::ReadTransaction,
}

impl ReadTxn {
    /// Open a top-level namespace
    ///
    /// Returns `None` if it was never created.
    pub fn namespace(&self, name: &str) -> Result<Option<Namespace>> {
        let namespaces = match self.txn.open_table(NAMESPACES) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(storage_failure(e)),
        };
        if namespaces.get(name).map_err(storage_failure)?.is_none() {
            return Ok(None);
        }
        let children = self.txn.open_table(CHILDREN).map_err(storage_failure)?;
        let entries = self.txn.open_table(ENTRIES).map_err(storage_failure)?;
        Ok(Some(Namespace::new(name, children, entries)))
    }

    /// Names of all top-level namespaces, in key order
    pub fn namespace_names(&self) -> Result<Vec<String>> {
        let namespaces = match self.txn.open_table(NAMESPACES) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(storage_failure(e)),
        };
        let mut names = Vec::new();
        for item in namespaces.iter().map_err(storage_failure)? {
            let (name, _) = item.map_err(storage_failure)?;
            names.push(name.value().to_string());
        }
        Ok(names)
    }
}
