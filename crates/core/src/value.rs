//! Value types for docstore
//!
//! ## Persisted Value Model
//!
//! The Value enum has exactly 4 variants: String, Int, Float, Bool.
//! There is no null; absence is expressed by leaving a field out.
//!
//! ### Equality
//!
//! Two values are equal iff they have the same variant and the same encoded
//! payload. Floats therefore compare by bit pattern:
//! - `NaN == NaN` when the payloads match
//! - `-0.0 != 0.0`
//! - `Int(1) != Float(1.0)`
//!
//! This is the equality filters use, and it makes `decode(encode(v)) == v`
//! hold for every value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Type tag for the persisted value variants
///
/// ## TypeTag Values
///
/// These values are part of the on-disk format and MUST NOT change:
/// - String = 0x01
/// - Int = 0x02
/// - Bool = 0x03
/// - Float = 0x04
///
/// 0x00 is reserved and never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ValueTag {
    /// UTF-8 string payload
    String = 0x01,
    /// 4-byte little-endian i32 payload
    Int = 0x02,
    /// 1-byte boolean payload
    Bool = 0x03,
    /// 8-byte little-endian f64 payload
    Float = 0x04,
}

impl ValueTag {
    /// All tags, in on-disk order
    pub const ALL: [ValueTag; 4] = [
        ValueTag::String,
        ValueTag::Int,
        ValueTag::Bool,
        ValueTag::Float,
    ];

    /// Convert to byte representation
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    /// Try to create from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(ValueTag::String),
            0x02 => Some(ValueTag::Int),
            0x03 => Some(ValueTag::Bool),
            0x04 => Some(ValueTag::Float),
            _ => None,
        }
    }

    /// Fixed payload width, `None` for variable-width strings
    pub fn payload_width(&self) -> Option<usize> {
        match self {
            ValueTag::String => None,
            ValueTag::Int => Some(4),
            ValueTag::Bool => Some(1),
            ValueTag::Float => Some(8),
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueTag::String => "string",
            ValueTag::Int => "int",
            ValueTag::Bool => "bool",
            ValueTag::Float => "float",
        };
        f.write_str(name)
    }
}

/// A scalar field value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 string
    String(String),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl Value {
    /// The tag this value is persisted under
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::String(_) => ValueTag::String,
            Value::Int(_) => ValueTag::Int,
            Value::Float(_) => ValueTag::Float,
            Value::Bool(_) => ValueTag::Bool,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i32 if this is an Int value
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a dynamically-typed JSON value
    ///
    /// Strings, booleans, integers that fit in 32 bits and floats are
    /// accepted. Everything else is rejected with a descriptive type name:
    /// `null`, `array` and `object` give `UnsupportedType`, wider integers
    /// give `IntegerOutOfRange`.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::try_from(i)
                } else if let Some(u) = n.as_u64() {
                    Err(Error::IntegerOutOfRange(u as i128))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(Error::unsupported("number"))
                }
            }
            other => Err(Error::unsupported(json_type_name(other))),
        }
    }

    /// Convert back to JSON
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// Descriptive name of a JSON value's type
pub fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bit-pattern equality, matching the persisted payload
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        match self {
            Value::String(s) => s.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
        }
    }
}

// Orders by tag first, then within the variant.
// f64::total_cmp is Equal exactly when the bit patterns match, so this
// agrees with PartialEq.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            _ => self.tag().cmp(&other.tag()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl TryFrom<i64> for Value {
    type Error = Error;

    fn try_from(i: i64) -> Result<Self> {
        i32::try_from(i)
            .map(Value::Int)
            .map_err(|_| Error::IntegerOutOfRange(i as i128))
    }
}
