//! Core types for docstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: the four persisted scalar variants and their type tags
//! - Codec: Value <-> (tag, payload bytes)
//! - Key scheme: (field name, tag) <-> storage key
//! - RecordId / Record / Document: record identity and field mapping
//! - Filter: equality constraints, match mode, sort and limit
//! - Error: error taxonomy shared by every crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod filter;
pub mod key;
pub mod limits;
pub mod types;
pub mod value;

pub use codec::{decode, encode, Encoded};
pub use error::{Error, Result};
pub use filter::{Filter, MatchMode, SortKey};
pub use key::{make_key, split_key};
pub use limits::{MAX_COLLECTION_NAME_LEN, MAX_FIELD_NAME_LEN};
pub use types::{Collection, Document, Record, RecordId};
pub use value::{json_type_name, Value, ValueTag};
