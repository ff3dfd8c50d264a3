//! Constraint groups.

use crate::{value::Value, value_set::ValueSet};

/// The three constraint families a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GroupKind {
    /// A horizontal line of cells.
    #[display("row")]
    Row,
    /// A vertical line of cells.
    #[display("column")]
    Column,
    /// A rectangular block of cells.
    #[display("block")]
    Block,
}

/// Per-group bookkeeping: the set of values placed in one row, column, or
/// block, plus a validity flag.
///
/// The uniqueness invariant is that no value appears twice in any group;
/// [`record`](Self::record) refuses duplicates. The `valid` flag is not
/// touched by generation — it is reserved for a consumer that detects
/// broader conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    values: ValueSet,
    valid: bool,
}

impl Group {
    /// Creates an empty, valid group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: ValueSet::EMPTY,
            valid: true,
        }
    }

    /// Returns the set of values placed in this group.
    #[must_use]
    pub const fn values(&self) -> ValueSet {
        self.values
    }

    /// Returns the consumer-owned validity flag.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Sets the consumer-owned validity flag.
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Records a placed value. Returns `false` if it was already present,
    /// leaving the group unchanged.
    pub(crate) fn record(&mut self, value: Value) -> bool {
        self.values.insert(value)
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}
