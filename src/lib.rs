//! Docstore - minimal embedded document store
//!
//! Docstore stores schemaless records of scalar fields (string, 32-bit
//! integer, float, boolean) in named collections, on top of the redb
//! transactional key-value engine.
//!
//! # Quick Start
//!
//! ```no_run
//! use docstore::{Database, Filter};
//! use serde_json::json;
//!
//! # fn main() -> docstore::Result<()> {
//! let db = Database::open("/tmp/docstore-demo")?;
//!
//! db.insert_json("users", &json!({"name": "Ada", "age": 37}))?;
//! db.insert_json("users", &json!({"name": "Grace", "age": 45}))?;
//!
//! let ada = db.select("users", &Filter::new().eq("name", "Ada"))?;
//! assert_eq!(ada.len(), 1);
//!
//! db.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `docstore-core`: value model, codec, key scheme, filters, errors
//! - `docstore-storage`: namespace layout over redb
//! - `docstore-engine`: database facade, record store, query evaluator
//!
//! Only the facade and the value types are re-exported here.

pub use docstore_core::{
    decode, encode, make_key, split_key, Collection, Document, Encoded, Error, Filter, MatchMode,
    Record, RecordId, Result, SortKey, Value, ValueTag, MAX_COLLECTION_NAME_LEN, MAX_FIELD_NAME_LEN,
};
pub use docstore_engine::{Database, DocstoreConfig, CONFIG_FILE_NAME, DATA_FILE_NAME};
pub use docstore_storage::Durability;
