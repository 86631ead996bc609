//! Record key scheme
//!
//! A field is stored under a key made of the field name followed by one
//! binary tag byte:
//!
//! ```text
//! ┌──────────────────────────┬──────────┐
//! │ field name (UTF-8, var)  │ tag (1B) │
//! └──────────────────────────┴──────────┘
//! ```
//!
//! The tag is always the last byte, so splitting never depends on the
//! content of the name. Digits, separators and unicode in names are all
//! unambiguous.

use crate::error::{Error, Result};
use crate::limits::validate_field_name;
use crate::value::ValueTag;

/// Build the storage key for a field
pub fn make_key(name: &str, tag: ValueTag) -> Result<Vec<u8>> {
    validate_field_name(name)?;
    let mut key = Vec::with_capacity(name.len() + 1);
    key.extend_from_slice(name.as_bytes());
    key.push(tag.as_byte());
    Ok(key)
}

/// Split a storage key back into field name and tag
pub fn split_key(key: &[u8]) -> Result<(String, ValueTag)> {
    let (&tag_byte, name) = key
        .split_last()
        .ok_or_else(|| Error::corrupt("", "empty field key"))?;
    let tag = ValueTag::from_byte(tag_byte)
        .ok_or_else(|| Error::corrupt("", format!("unknown value tag {tag_byte:#04x}")))?;
    if name.is_empty() {
        return Err(Error::corrupt("", "field key has no name"));
    }
    let name = std::str::from_utf8(name)
        .map_err(|e| Error::corrupt("", format!("field name is not UTF-8: {e}")))?;
    Ok((name.to_string(), tag))
}
