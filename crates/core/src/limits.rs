//! Size limits for names
//!
//! Collection and field names become storage keys, so they are bounded.
//! Values are not: a string payload may be as large as the engine accepts.

use crate::error::{Error, Result};

/// Maximum collection name length in bytes
pub const MAX_COLLECTION_NAME_LEN: usize = 255;

/// Maximum field name length in bytes
pub const MAX_FIELD_NAME_LEN: usize = 1024;

/// Check that a collection name can be used as a namespace
pub fn validate_collection_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.len() > MAX_COLLECTION_NAME_LEN {
        "name exceeds 255 bytes"
    } else {
        return Ok(());
    };
    Err(Error::InvalidCollectionName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Check that a field name can be encoded as a storage key
pub fn validate_field_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.len() > MAX_FIELD_NAME_LEN {
        "name exceeds 1024 bytes"
    } else {
        return Ok(());
    };
    Err(Error::InvalidFieldName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
