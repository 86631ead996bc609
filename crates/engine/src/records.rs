//! Record store
//!
//! Writes one record per call: a fresh child namespace under the
//! collection, keyed by the record id, holding one entry per field.
//!
//! Field conversion and encoding run inside the caller's write transaction.
//! A failing field makes the closure return `Err`, which aborts the whole
//! transaction, so no partial record is ever committed.

use docstore_core::limits::validate_collection_name;
use docstore_core::{encode, json_type_name, make_key, Collection, Error, RecordId, Result, Value};
use docstore_storage::{NamespaceMut, WriteTxn};
use std::borrow::Cow;
use tracing::debug;

/// Create a collection namespace unless it exists
pub(crate) fn create_collection(txn: &WriteTxn, name: &str) -> Result<Collection> {
    validate_collection_name(name)?;
    if txn.create_namespace_if_absent(name)? {
        debug!(target: "docstore::db", collection = name, "Created collection");
    }
    Ok(Collection::new(name))
}

/// Insert a record whose fields are produced by `fields`
///
/// Each item is either a field or the error converting it.
pub(crate) fn insert<'a, I>(txn: &WriteTxn, collection: &str, fields: I) -> Result<RecordId>
where
    I: IntoIterator<Item = Result<(&'a str, Cow<'a, Value>)>>,
{
    create_collection(txn, collection)?;
    let mut namespace = txn
        .namespace(collection)?
        .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))?;

    let id = RecordId::new();
    let record = id.to_string();
    namespace.create_child_if_absent(&record)?;

    let mut written = 0usize;
    for field in fields {
        let (name, value) = field?;
        write_field(&mut namespace, &record, name, &value)?;
        written += 1;
    }

    debug!(
        target: "docstore::db",
        collection,
        record = %id,
        fields = written,
        "Inserted record"
    );
    Ok(id)
}

/// Fields of a JSON object, converted lazily
///
/// A non-object document yields a single `UnsupportedType` error.
pub(crate) fn json_fields(
    doc: &serde_json::Value,
) -> Box<dyn Iterator<Item = Result<(&str, Cow<'_, Value>)>> + '_> {
    match doc {
        serde_json::Value::Object(map) => Box::new(map.iter().map(|(name, json)| {
            Value::from_json(json).map(|value| (name.as_str(), Cow::Owned(value)))
        })),
        other => Box::new(std::iter::once(Err(Error::unsupported(json_type_name(
            other,
        ))))),
    }
}

fn write_field(
    namespace: &mut NamespaceMut<'_>,
    record: &str,
    name: &str,
    value: &Value,
) -> Result<()> {
    let encoded = encode(value);
    let key = make_key(name, encoded.tag)?;
    namespace.put(record, &key, &encoded.payload)
}
