//! Mapping of engine errors into the docstore taxonomy

use docstore_core::Error;

/// Convert any redb error into `Error::StorageFailure`
///
/// Every redb error type converts into `redb::Error`, so this works as a
/// plain `map_err` argument for all of them.
pub fn storage_failure(e: impl Into<redb::Error>) -> Error {
    Error::StorageFailure(e.into().to_string())
}
