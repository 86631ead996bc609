//! End-to-end tests for the public `docstore` API.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod filters;
mod lifecycle;
mod properties;
