//! Storage layer for docstore
//!
//! This crate adapts the redb engine to the namespace model the document
//! layer is written against:
//! - Store: open/close, transaction entry points (file or in-memory backend)
//! - WriteTxn / ReadTxn: one engine transaction each
//! - NamespaceMut / Namespace: a top-level namespace with child namespaces,
//!   each child holding ordered leaf entries
//! - StoreOptions: durability and cache settings
//!
//! ## Layout
//!
//! Nesting is expressed with composite tuple keys over three tables:
//!
//! | Table                 | Key                       | Value   |
//! |-----------------------|---------------------------|---------|
//! | `docstore_namespaces` | `name`                    | `()`    |
//! | `docstore_children`   | `(name, child)`           | `()`    |
//! | `docstore_entries`    | `(name, child, key)`      | `bytes` |
//!
//! Tuple keys compare element by element, so a range scan starting at
//! `(name, "")` walks one namespace's children in order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod namespace;
pub mod options;
pub mod store;
mod tables;

pub use error::storage_failure;
pub use namespace::{Namespace, NamespaceMut};
pub use options::{Durability, StoreOptions};
pub use store::{ReadTxn, Store, WriteTxn};
