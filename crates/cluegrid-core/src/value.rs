//! Placeable value representation.

use std::fmt::{self, Display};

/// A placeable value in the range 1-9.
///
/// This enum provides a type-safe representation of the nine values the
/// generator may assign to a cell, preventing out-of-range values at
/// compile time.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Value;
///
/// let value = Value::V5;
/// assert_eq!(value.get(), 5);
///
/// // Fallible conversion from a raw integer
/// assert_eq!(Value::from_u8(7), Some(Value::V7));
/// assert_eq!(Value::from_u8(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    /// The value 1.
    V1 = 1,
    /// The value 2.
    V2 = 2,
    /// The value 3.
    V3 = 3,
    /// The value 4.
    V4 = 4,
    /// The value 5.
    V5 = 5,
    /// The value 6.
    V6 = 6,
    /// The value 7.
    V7 = 7,
    /// The value 8.
    V8 = 8,
    /// The value 9.
    V9 = 9,
}

impl Value {
    /// Array containing all values from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self::V1,
        Self::V2,
        Self::V3,
        Self::V4,
        Self::V5,
        Self::V6,
        Self::V7,
        Self::V8,
        Self::V9,
    ];

    /// Creates a value from a raw integer, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluegrid_core::Value;
    ///
    /// assert_eq!(Value::from_u8(1), Some(Value::V1));
    /// assert_eq!(Value::from_u8(9), Some(Value::V9));
    /// assert_eq!(Value::from_u8(10), None);
    /// ```
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            3 => Some(Self::V3),
            4 => Some(Self::V4),
            5 => Some(Self::V5),
            6 => Some(Self::V6),
            7 => Some(Self::V7),
            8 => Some(Self::V8),
            9 => Some(Self::V9),
            _ => None,
        }
    }

    /// Returns the numeric value (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.get(), f)
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> u8 {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for value in Value::ALL {
            assert_eq!(Value::from_u8(value.get()), Some(value));
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Value::from_u8(0), None);
        assert_eq!(Value::from_u8(10), None);
        assert_eq!(Value::from_u8(255), None);
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Value::ALL.len(), 9);
        for (i, value) in (1..).zip(Value::ALL) {
            assert_eq!(value.get(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::V1), "1");
        assert_eq!(format!("{}", Value::V9), "9");
    }
}
