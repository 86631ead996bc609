//! Table definitions for the namespace layout

use redb::TableDefinition;

/// Top-level namespaces
pub(crate) const NAMESPACES: TableDefinition<&str, ()> =
    TableDefinition::new("docstore_namespaces");

/// Child namespaces, keyed `(namespace, child)`
pub(crate) const CHILDREN: TableDefinition<(&str, &str), ()> =
    TableDefinition::new("docstore_children");

/// Leaf entries, keyed `(namespace, child, key)`
pub(crate) const ENTRIES: TableDefinition<(&str, &str, &[u8]), &[u8]> =
    TableDefinition::new("docstore_entries");
