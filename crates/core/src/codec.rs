//! Typed value codec
//!
//! Converts a [`Value`] to a `(tag, payload)` pair and back.
//!
//! ## Payload Format
//!
//! | Tag    | Payload                                 |
//! |--------|-----------------------------------------|
//! | String | UTF-8 bytes, no length prefix           |
//! | Int    | 4 bytes, little-endian two's complement |
//! | Bool   | 1 byte, `0x00` or `0x01`                |
//! | Float  | 8 bytes, little-endian IEEE-754 bits    |
//!
//! Payload boundaries come from the storage entry, so strings need no
//! length prefix. Fixed-width payloads of the wrong length are corruption.
//!
//! Decoding errors are `CorruptRecord` with an empty record name; the
//! caller attaches the record via [`Error::in_record`].

use crate::error::{Error, Result};
use crate::value::{Value, ValueTag};

/// An encoded value: the tag stored in the key and the payload stored as the
/// entry value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Type tag
    pub tag: ValueTag,
    /// Payload bytes
    pub payload: Vec<u8>,
}

/// Encode a value into its tag and payload
pub fn encode(value: &Value) -> Encoded {
    let payload = match value {
        Value::String(s) => s.as_bytes().to_vec(),
        Value::Int(i) => i.to_le_bytes().to_vec(),
        Value::Float(f) => f.to_bits().to_le_bytes().to_vec(),
        Value::Bool(b) => vec![u8::from(*b)],
    };
    Encoded {
        tag: value.tag(),
        payload,
    }
}

/// Decode a payload stored under `tag`
pub fn decode(tag: ValueTag, payload: &[u8]) -> Result<Value> {
    if let Some(width) = tag.payload_width() {
        if payload.len() != width {
            return Err(Error::corrupt(
                "",
                format!(
                    "{tag} payload is {} bytes, expected {width}",
                    payload.len()
                ),
            ));
        }
    }

    match tag {
        ValueTag::String => String::from_utf8(payload.to_vec())
            .map(Value::String)
            .map_err(|e| Error::corrupt("", format!("string payload is not UTF-8: {e}"))),
        ValueTag::Int => Ok(Value::Int(i32::from_le_bytes(fixed(payload)?))),
        ValueTag::Float => Ok(Value::Float(f64::from_bits(u64::from_le_bytes(fixed(
            payload,
        )?)))),
        ValueTag::Bool => match payload[0] {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(Error::corrupt(
                "",
                format!("bool payload byte is {other:#04x}, expected 0x00 or 0x01"),
            )),
        },
    }
}

fn fixed<const N: usize>(payload: &[u8]) -> Result<[u8; N]> {
    payload
        .try_into()
        .map_err(|_| Error::corrupt("", format!("payload is {} bytes, expected {N}", payload.len())))
}
