//! Store options

use serde::{Deserialize, Serialize};

/// When committed writes reach disk
///
/// | Mode      | Behavior                                              |
/// |-----------|-------------------------------------------------------|
/// | Immediate | Commit returns after data is fsync'd (default)        |
/// | Eventual  | Commit returns before fsync; a crash may lose commits |
/// | None      | Not persisted until a later non-None commit           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// fsync on every commit
    #[default]
    Immediate,
    /// Let the engine fsync later
    Eventual,
    /// No persistence guarantee
    None,
}

impl Durability {
    /// Parse a config string (`"immediate"`, `"eventual"`, `"none"`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(Durability::Immediate),
            "eventual" => Some(Durability::Eventual),
            "none" => Some(Durability::None),
            _ => None,
        }
    }
}

impl From<Durability> for redb::Durability {
    fn from(d: Durability) -> Self {
        match d {
            Durability::Immediate => redb::Durability::Immediate,
            Durability::Eventual => redb::Durability::Eventual,
            Durability::None => redb::Durability::None,
        }
    }
}

/// Options applied when opening a [`Store`](crate::Store)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Durability of write transactions
    pub durability: Durability,
    /// Engine page cache size; engine default when unset
    pub cache_size_bytes: Option<usize>,
}
