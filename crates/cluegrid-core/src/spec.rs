//! Validated grid dimensions and block geometry.

use crate::{cell::CellId, position::Position};

/// Validated grid dimensions: row and column counts plus the height and
/// width of the rectangular blocks tiling the grid.
///
/// Construction rejects empty dimensions and block shapes that do not tile
/// the grid evenly, so every `GridSpec` in circulation describes a
/// well-formed layout.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{GridSpec, Position};
///
/// let spec = GridSpec::standard();
/// assert_eq!(spec.cell_count(), 81);
/// assert_eq!(spec.block_count(), 9);
///
/// // Center cell of the center block
/// assert_eq!(spec.block_index(Position::new(4, 4)), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: u8,
    columns: u8,
    block_height: u8,
    block_width: u8,
}

/// Errors rejecting a malformed grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSpecError {
    /// Some dimension was zero.
    #[display("grid dimensions must be positive")]
    ZeroDimension,
    /// The block height does not tile the rows evenly.
    #[display("block height {block_height} does not divide {rows} rows")]
    IndivisibleRows {
        /// Requested row count.
        rows: u8,
        /// Requested block height.
        block_height: u8,
    },
    /// The block width does not tile the columns evenly.
    #[display("block width {block_width} does not divide {columns} columns")]
    IndivisibleColumns {
        /// Requested column count.
        columns: u8,
        /// Requested block width.
        block_width: u8,
    },
}

impl GridSpec {
    /// Creates a validated grid layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpecError::ZeroDimension`] if any dimension is zero,
    /// and [`GridSpecError::IndivisibleRows`] /
    /// [`GridSpecError::IndivisibleColumns`] if the block shape does not
    /// tile the grid evenly.
    pub const fn new(
        rows: u8,
        columns: u8,
        block_height: u8,
        block_width: u8,
    ) -> Result<Self, GridSpecError> {
        if rows == 0 || columns == 0 || block_height == 0 || block_width == 0 {
            return Err(GridSpecError::ZeroDimension);
        }
        if rows % block_height != 0 {
            return Err(GridSpecError::IndivisibleRows { rows, block_height });
        }
        if columns % block_width != 0 {
            return Err(GridSpecError::IndivisibleColumns {
                columns,
                block_width,
            });
        }
        Ok(Self {
            rows,
            columns,
            block_height,
            block_width,
        })
    }

    /// The reference 9×9 layout with 3×3 blocks.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rows: 9,
            columns: 9,
            block_height: 3,
            block_width: 3,
        }
    }

    /// Returns the row count.
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the column count.
    #[must_use]
    pub const fn columns(self) -> u8 {
        self.columns
    }

    /// Returns the block height.
    #[must_use]
    pub const fn block_height(self) -> u8 {
        self.block_height
    }

    /// Returns the block width.
    #[must_use]
    pub const fn block_width(self) -> u8 {
        self.block_width
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// Returns the total number of blocks.
    #[must_use]
    pub fn block_count(self) -> usize {
        usize::from(self.rows / self.block_height) * usize::from(self.columns / self.block_width)
    }

    /// Returns whether the position lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.row() < self.rows && position.column() < self.columns
    }

    /// Returns the row-major cell index of a position.
    ///
    /// The caller is expected to pass an in-bounds position; the result for
    /// an out-of-bounds one does not identify any cell.
    #[must_use]
    pub fn cell_id(self, position: Position) -> CellId {
        usize::from(position.row()) * usize::from(self.columns) + usize::from(position.column())
    }

    /// Returns the index of the block containing a position.
    ///
    /// Blocks are numbered left to right, top to bottom. For the standard
    /// layout this reduces to `column / 3 + 3 * (row / 3)`.
    #[must_use]
    pub fn block_index(self, position: Position) -> usize {
        let band = usize::from(position.row() / self.block_height);
        let stack = usize::from(position.column() / self.block_width);
        band * usize::from(self.columns / self.block_width) + stack
    }
}
