//! Namespace handles
//!
//! A namespace holds child namespaces; a child holds leaf entries. Both are
//! views over the shared tables, scoped by key prefix.

use crate::error::storage_failure;
use docstore_core::{Error, Result};
use redb::{ReadOnlyTable, ReadableTable, Table};

type ChildKey = (&'static str, &'static str);
type EntryKey = (&'static str, &'static str, &'static [u8]);

/// A top-level namespace opened in a write transaction
pub struct NamespaceMut<'txn> {
    name: String,
    children: Table<'txn, ChildKey, ()>,
    entries: Table<'txn, EntryKey, &'static [u8]>,
}

impl<'txn> NamespaceMut<'txn> {
    pub(crate) fn new(
        name: &str,
        children: Table<'txn, ChildKey, ()>,
        entries: Table<'txn, EntryKey, &'static [u8]>,
    ) -> Self {
        Self {
            name: name.to_string(),
            children,
            entries,
        }
    }

    /// Namespace name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a child namespace unless it exists
    ///
    /// Returns `true` if the child was created by this call.
    pub fn create_child_if_absent(&mut self, child: &str) -> Result<bool> {
        let existing = self
            .children
            .insert((self.name.as_str(), child), ())
            .map_err(storage_failure)?;
        Ok(existing.is_none())
    }

    /// Write a leaf entry into an existing child namespace
    pub fn put(&mut self, child: &str, key: &[u8], value: &[u8]) -> Result<()> {
        let exists = self
            .children
            .get((self.name.as_str(), child))
            .map_err(storage_failure)?
            .is_some();
        if !exists {
            return Err(Error::StorageFailure(format!(
                "child namespace {}/{} does not exist",
                self.name, child
            )));
        }
        self.entries
            .insert((self.name.as_str(), child, key), value)
            .map_err(storage_failure)?;
        Ok(())
    }
}

/// A top-level namespace opened in a read transaction
pub struct Namespace {
    name: String,
    children: ReadOnlyTable<ChildKey, ()>,
    entries: ReadOnlyTable<EntryKey, &'static [u8]>,
}

impl Namespace {
    pub(crate) fn new(
        name: &str,
        children: ReadOnlyTable<ChildKey, ()>,
        entries: ReadOnlyTable<EntryKey, &'static [u8]>,
    ) -> Self {
        Self {
            name: name.to_string(),
            children,
            entries,
        }
    }

    /// Namespace name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child namespace names in engine order
    pub fn children(&self) -> Result<impl Iterator<Item = Result<String>> + '_> {
        let name = self.name.as_str();
        let range = self
            .children
            .range((name, "")..)
            .map_err(storage_failure)?;
        Ok(range.map_while(move |item| match item {
            Err(e) => Some(Err(storage_failure(e))),
            Ok((key, _)) => {
                let (namespace, child) = key.value();
                (namespace == name).then(|| Ok(child.to_string()))
            }
        }))
    }

    /// Number of child namespaces
    pub fn child_count(&self) -> Result<usize> {
        let mut count = 0;
        for child in self.children()? {
            child?;
            count += 1;
        }
        Ok(count)
    }

    /// Leaf entries of one child namespace in key order
    ///
    /// A child that does not exist yields nothing.
    pub fn entries<'a>(
        &'a self,
        child: &'a str,
    ) -> Result<impl Iterator<Item = Result<(Vec<u8>, Vec<u8>)>> + 'a> {
        let name = self.name.as_str();
        let start: &[u8] = &[];
        let range = self
            .entries
            .range((name, child, start)..)
            .map_err(storage_failure)?;
        Ok(range.map_while(move |item| match item {
            Err(e) => Some(Err(storage_failure(e))),
            Ok((key, value)) => {
                let (namespace, owner, field) = key.value();
                (namespace == name && owner == child)
                    .then(|| Ok((field.to_vec(), value.value().to_vec())))
            }
        }))
    }
}
