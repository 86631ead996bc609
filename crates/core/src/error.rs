//! Error types for docstore
//!
//! Every crate in the workspace returns [`Error`]. The variants separate
//! problems with caller input (fix the input), storage failures (may be
//! retried) and state errors (collection missing, store closed).

use std::io;
use thiserror::Error;

/// Result type alias for docstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the document store
#[derive(Debug, Error)]
pub enum Error {
    /// A value offered for storage is not one of the supported scalar kinds
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// Descriptive name of the rejected value's type
        type_name: String,
    },

    /// An integer does not fit the 32-bit persisted width
    #[error("Integer out of range: {0} does not fit in 32 bits")]
    IntegerOutOfRange(i128),

    /// A field name cannot be encoded as a storage key
    #[error("Invalid field name {name:?}: {reason}")]
    InvalidFieldName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A collection name cannot be used as a namespace
    #[error("Invalid collection name {name:?}: {reason}")]
    InvalidCollectionName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A read targeted a collection that was never created
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// A persisted record could not be decoded
    #[error("Corrupt record {record}: {reason}")]
    CorruptRecord {
        /// Record namespace name (the record id as stored)
        record: String,
        /// What was wrong with it
        reason: String,
    },

    /// The storage engine reported a failure; the operation wrote nothing
    #[error("Storage failure: {0}")]
    StorageFailure(String),

    /// The database handle was closed
    #[error("Store closed")]
    StoreClosed,

    /// Configuration file could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (data directory, config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `UnsupportedType` error from a type name
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Error::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Build a `CorruptRecord` error
    pub fn corrupt(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::CorruptRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Attach a record name to a corruption error raised without one
    ///
    /// Codec and key decoding do not know which record they are reading;
    /// the query layer fills that in. Other variants pass through.
    pub fn in_record(self, record: &str) -> Self {
        match self {
            Error::CorruptRecord { reason, .. } => Error::corrupt(record, reason),
            other => other,
        }
    }

    /// Whether retrying the same operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StorageFailure(_))
    }

    /// Whether the error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType { .. }
                | Error::IntegerOutOfRange(_)
                | Error::InvalidFieldName { .. }
                | Error::InvalidCollectionName { .. }
        )
    }
}
