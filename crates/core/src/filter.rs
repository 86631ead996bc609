//! Query filters
//!
//! A [`Filter`] carries equality constraints, how they combine, and the
//! optional sort key and result limit applied after filtering.
//!
//! ## Match Modes
//!
//! - `Any` (default): a record is included if at least one constraint field
//!   is present and equal. This is the historical behaviour of the store.
//! - `All`: every constraint field must be present and equal.
//!
//! With no constraints both modes include every record.

use crate::types::{Document, Record};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// How multiple equality constraints combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// At least one constraint must match
    #[default]
    Any,
    /// Every constraint must match
    All,
}

/// Field to order results by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field name
    pub field: String,
    /// Largest first when true
    pub descending: bool,
}

/// Query descriptor for `select`
///
/// # Example
///
/// ```
/// use docstore_core::Filter;
///
/// let filter = Filter::new()
///     .eq("status", "active")
///     .eq("role", "admin")
///     .match_all()
///     .sort_by_desc("age")
///     .limit(10);
/// assert_eq!(filter.eq.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Equality constraints, field name to required value
    pub eq: BTreeMap<String, Value>,
    /// How constraints combine
    pub mode: MatchMode,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Result ordering
    pub sort: Option<SortKey>,
}

impl Filter {
    /// Filter matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality constraint
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.eq.insert(field.into(), value.into());
        self
    }

    /// Require every constraint to match
    pub fn match_all(mut self) -> Self {
        self.mode = MatchMode::All;
        self
    }

    /// Require at least one constraint to match
    pub fn match_any(mut self) -> Self {
        self.mode = MatchMode::Any;
        self
    }

    /// Return at most `n` records
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Order results by `field`, smallest first
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(SortKey {
            field: field.into(),
            descending: false,
        });
        self
    }

    /// Order results by `field`, largest first
    pub fn sort_by_desc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(SortKey {
            field: field.into(),
            descending: true,
        });
        self
    }

    /// Whether a record's fields satisfy the equality constraints
    pub fn matches(&self, fields: &Document) -> bool {
        if self.eq.is_empty() {
            return true;
        }
        let mut hits = self
            .eq
            .iter()
            .map(|(field, wanted)| fields.get(field) == Some(wanted));
        match self.mode {
            MatchMode::Any => hits.any(|hit| hit),
            MatchMode::All => hits.all(|hit| hit),
        }
    }

    /// Whether the scan can stop once `limit` records matched
    ///
    /// Only true without a sort key; sorting needs every match first.
    pub fn is_satisfied_by(&self, matched: usize) -> bool {
        self.sort.is_none() && self.limit.is_some_and(|n| matched >= n)
    }

    /// Apply sort key and limit to matched records
    ///
    /// Records missing the sort field go last in either direction. The sort
    /// is stable, so ties keep scan order.
    pub fn finish(&self, records: &mut Vec<Record>) {
        if let Some(sort) = &self.sort {
            records.sort_by(|a, b| {
                match (a.fields.get(&sort.field), b.fields.get(&sort.field)) {
                    (Some(x), Some(y)) if sort.descending => y.cmp(x),
                    (Some(x), Some(y)) => x.cmp(y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }
        if let Some(n) = self.limit {
            records.truncate(n);
        }
    }
}
