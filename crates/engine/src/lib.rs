//! Database engine for docstore
//!
//! This crate ties the lower layers together:
//! - Database: facade with open/close and the public operations
//! - Record store: encodes documents into per-record namespaces
//! - Query evaluator: scans, decodes and filters records
//! - Configuration: `docstore.toml` in the data directory
//!
//! The engine is the only component that knows about both the value codecs
//! (`docstore-core`) and the namespace layout (`docstore-storage`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
mod query;
mod records;

pub use database::{Database, DocstoreConfig, CONFIG_FILE_NAME, DATA_FILE_NAME};
