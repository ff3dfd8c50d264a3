//! Directional coordinate transforms.

use cluegrid_core::{GridSpec, Position};

/// One of the four supported cursor movement directions.
///
/// Each direction carries a pure coordinate transform with wrap-around:
/// stepping past an edge re-enters the grid on the opposite side. Diagonal
/// movement is deliberately not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Decrement the row, wrapping to the bottom edge.
    Up,
    /// Increment the row, wrapping to the top edge.
    Down,
    /// Decrement the column, wrapping to the right edge.
    Left,
    /// Increment the column, wrapping to the left edge.
    Right,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Maps a key identifier to a direction.
    ///
    /// Exactly four identifiers are recognized (`"ArrowUp"`, `"ArrowDown"`,
    /// `"ArrowLeft"`, `"ArrowRight"`); any other key yields `None`, meaning
    /// the input requests no movement. The mapping reads no grid state.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluegrid_nav::Direction;
    ///
    /// assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key("PageDown"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Applies the direction's transform to a coordinate, wrapping at the
    /// grid edges described by `spec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluegrid_core::{GridSpec, Position};
    /// use cluegrid_nav::Direction;
    ///
    /// let spec = GridSpec::standard();
    /// let moved = Direction::Up.step(Position::new(0, 0), spec);
    /// assert_eq!(moved, Position::new(8, 0));
    /// ```
    #[must_use]
    pub fn step(self, position: Position, spec: GridSpec) -> Position {
        let row = position.row();
        let column = position.column();
        match self {
            Self::Up => {
                let row = if row == 0 { spec.rows() - 1 } else { row - 1 };
                Position::new(row, column)
            }
            Self::Down => {
                let row = if row + 1 == spec.rows() { 0 } else { row + 1 };
                Position::new(row, column)
            }
            Self::Left => {
                let column = if column == 0 {
                    spec.columns() - 1
                } else {
                    column - 1
                };
                Position::new(row, column)
            }
            Self::Right => {
                let column = if column + 1 == spec.columns() {
                    0
                } else {
                    column + 1
                };
                Position::new(row, column)
            }
        }
    }
}
