//! Query evaluator
//!
//! Scans every record namespace of a collection inside one read
//! transaction, decodes it, and keeps the records the filter accepts.
//!
//! ## Ordering
//!
//! Without a sort key, results come back in engine order, which is the
//! ascending order of the record id strings. Callers must not read any
//! meaning into it.
//!
//! ## Corruption
//!
//! A record that cannot be decoded aborts the scan with `CorruptRecord`.
//! Skipping it would hide the damage.

use docstore_core::{decode, split_key, Document, Error, Filter, Record, RecordId, Result};
use docstore_storage::{Namespace, ReadTxn};
use tracing::warn;

/// Return the records of `collection` accepted by `filter`
pub(crate) fn select(txn: &ReadTxn, collection: &str, filter: &Filter) -> Result<Vec<Record>> {
    let namespace = open_collection(txn, collection)?;

    let mut matched = Vec::new();
    for child in namespace.children()? {
        let child = child?;
        let record = decode_record(&namespace, &child).map_err(|e| {
            warn!(target: "docstore::db", collection, error = %e, "Aborting scan");
            e
        })?;
        if filter.matches(&record.fields) {
            matched.push(record);
            if filter.is_satisfied_by(matched.len()) {
                break;
            }
        }
    }

    filter.finish(&mut matched);
    Ok(matched)
}

/// Number of records in `collection`, without decoding them
pub(crate) fn count(txn: &ReadTxn, collection: &str) -> Result<usize> {
    open_collection(txn, collection)?.child_count()
}

fn open_collection(txn: &ReadTxn, collection: &str) -> Result<Namespace> {
    txn.namespace(collection)?
        .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))
}

/// Decode one record namespace into a [`Record`]
pub(crate) fn decode_record(namespace: &Namespace, child: &str) -> Result<Record> {
    let id = RecordId::from_string(child)
        .ok_or_else(|| Error::corrupt(child, "record name is not a UUID"))?;

    let mut fields = Document::new();
    for entry in namespace.entries(child)? {
        let (key, payload) = entry?;
        let (name, tag) = split_key(&key).map_err(|e| e.in_record(child))?;
        let value = decode(tag, &payload).map_err(|e| e.in_record(child))?;
        if let Some(previous) = fields.insert(name, value) {
            return Err(Error::corrupt(
                child,
                format!("field stored twice (one copy was {})", previous.type_name()),
            ));
        }
    }

    Ok(Record { id, fields })
}
