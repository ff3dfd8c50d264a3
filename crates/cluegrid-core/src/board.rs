//! Grid state with constraint bookkeeping.

use crate::{
    cell::{Cell, CellId},
    grid::Grid,
    group::{Group, GroupKind},
    position::Position,
    spec::GridSpec,
    value::Value,
    value_set::ValueSet,
};

/// A grid together with its three parallel group collections, indexed by
/// row, column, and block number.
///
/// Invariant: every placed value is present in exactly the row, column, and
/// block group matching the cell's coordinates. [`place_clue`](Self::place_clue)
/// is the only mutation that touches values, and it either updates all three
/// groups and the cell atomically or fails without changing anything.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Board, GridSpec, Value};
///
/// let mut board = Board::new(GridSpec::standard());
/// board.place_clue(0, Value::V7).unwrap();
///
/// assert!(board.row_groups()[0].values().contains(Value::V7));
/// assert!(board.column_groups()[0].values().contains(Value::V7));
/// assert!(board.block_groups()[0].values().contains(Value::V7));
/// assert!(board.grid().cell(0).unwrap().is_disabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    rows: Vec<Group>,
    columns: Vec<Group>,
    blocks: Vec<Group>,
}

/// Errors rejecting a clue placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// No cell exists with the given id.
    #[display("cell {id} is out of bounds")]
    UnknownCell {
        /// The rejected id.
        id: CellId,
    },
    /// The cell already holds a value.
    #[display("cell {id} already holds a value")]
    CellOccupied {
        /// The occupied cell's id.
        id: CellId,
    },
    /// The value is already present in one of the cell's groups.
    #[display("value {value} is already placed in this {kind}")]
    DuplicateValue {
        /// The group family holding the duplicate.
        kind: GroupKind,
        /// The rejected value.
        value: Value,
    },
}

impl Board {
    /// Creates a board with a blank grid and empty, valid groups.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            grid: Grid::new(spec),
            rows: vec![Group::new(); usize::from(spec.rows())],
            columns: vec![Group::new(); usize::from(spec.columns())],
            blocks: vec![Group::new(); spec.block_count()],
        }
    }

    /// Returns the board's layout.
    #[must_use]
    pub const fn spec(&self) -> GridSpec {
        self.grid.spec()
    }

    /// Returns the underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the row groups, indexed by row number.
    #[must_use]
    pub fn row_groups(&self) -> &[Group] {
        &self.rows
    }

    /// Returns the column groups, indexed by column number.
    #[must_use]
    pub fn column_groups(&self) -> &[Group] {
        &self.columns
    }

    /// Returns the block groups, indexed by block number.
    #[must_use]
    pub fn block_groups(&self) -> &[Group] {
        &self.blocks
    }

    /// Returns the cell at the given coordinates, if they are in bounds.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<&Cell> {
        self.grid.cell_at(position)
    }

    /// Returns a mutable reference to a cell for presentation-layer flag
    /// updates.
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.grid.cell_mut(id)
    }

    /// Returns the values that may still be placed in the cell without
    /// violating any of its three groups.
    ///
    /// An unknown id yields the empty set.
    #[must_use]
    pub fn legal_values(&self, id: CellId) -> ValueSet {
        let Some(cell) = self.grid.cell(id) else {
            return ValueSet::EMPTY;
        };
        let taken = self.rows[usize::from(cell.position().row())]
            .values()
            .union(self.columns[usize::from(cell.position().column())].values())
            .union(self.blocks[cell.block()].values());
        taken.complement()
    }

    /// Places a generator clue: records the value in the cell's row,
    /// column, and block groups, sets the cell's value, and marks the cell
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::UnknownCell`] for an out-of-bounds id,
    /// [`PlaceError::CellOccupied`] if the cell already holds a value, and
    /// [`PlaceError::DuplicateValue`] if any of the three groups already
    /// contains the value. On error the board is unchanged.
    pub fn place_clue(&mut self, id: CellId, value: Value) -> Result<(), PlaceError> {
        let Some(cell) = self.grid.cell(id) else {
            return Err(PlaceError::UnknownCell { id });
        };
        if cell.value().is_some() {
            return Err(PlaceError::CellOccupied { id });
        }

        let row = usize::from(cell.position().row());
        let column = usize::from(cell.position().column());
        let block = cell.block();

        for (kind, group) in [
            (GroupKind::Row, &self.rows[row]),
            (GroupKind::Column, &self.columns[column]),
            (GroupKind::Block, &self.blocks[block]),
        ] {
            if group.values().contains(value) {
                return Err(PlaceError::DuplicateValue { kind, value });
            }
        }

        self.rows[row].record(value);
        self.columns[column].record(value);
        self.blocks[block].record(value);
        if let Some(cell) = self.grid.cell_mut(id) {
            cell.fix_value(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_empty_groups() {
        let board = Board::new(GridSpec::standard());
        assert_eq!(board.row_groups().len(), 9);
        assert_eq!(board.column_groups().len(), 9);
        assert_eq!(board.block_groups().len(), 9);
        for group in board
            .row_groups()
            .iter()
            .chain(board.column_groups())
            .chain(board.block_groups())
        {
            assert!(group.values().is_empty());
            assert!(group.is_valid());
        }
    }

    #[test]
    fn test_place_clue_updates_all_three_groups() {
        let mut board = Board::new(GridSpec::standard());
        let id = board.spec().cell_id(Position::new(4, 7));
        board.place_clue(id, Value::V3).unwrap();

        assert!(board.row_groups()[4].values().contains(Value::V3));
        assert!(board.column_groups()[7].values().contains(Value::V3));
        assert!(board.block_groups()[5].values().contains(Value::V3));

        let cell = board.grid().cell(id).unwrap();
        assert_eq!(cell.value(), Some(Value::V3));
        assert!(cell.is_disabled());
    }

    #[test]
    fn test_place_clue_rejects_occupied_cell() {
        let mut board = Board::new(GridSpec::standard());
        board.place_clue(0, Value::V1).unwrap();
        assert_eq!(
            board.place_clue(0, Value::V2),
            Err(PlaceError::CellOccupied { id: 0 })
        );
    }

    #[test]
    fn test_place_clue_rejects_unknown_cell() {
        let mut board = Board::new(GridSpec::standard());
        assert_eq!(
            board.place_clue(81, Value::V1),
            Err(PlaceError::UnknownCell { id: 81 })
        );
    }

    #[test]
    fn test_place_clue_rejects_duplicates_per_group() {
        let mut board = Board::new(GridSpec::standard());
        board.place_clue(0, Value::V5).unwrap();

        // Same row, different column and block
        let row_peer = board.spec().cell_id(Position::new(0, 8));
        assert_eq!(
            board.place_clue(row_peer, Value::V5),
            Err(PlaceError::DuplicateValue {
                kind: GroupKind::Row,
                value: Value::V5
            })
        );

        // Same column, different row and block
        let column_peer = board.spec().cell_id(Position::new(8, 0));
        assert_eq!(
            board.place_clue(column_peer, Value::V5),
            Err(PlaceError::DuplicateValue {
                kind: GroupKind::Column,
                value: Value::V5
            })
        );

        // Same block, different row and column
        let block_peer = board.spec().cell_id(Position::new(1, 1));
        assert_eq!(
            board.place_clue(block_peer, Value::V5),
            Err(PlaceError::DuplicateValue {
                kind: GroupKind::Block,
                value: Value::V5
            })
        );
    }

    #[test]
    fn test_failed_placement_leaves_board_unchanged() {
        let mut board = Board::new(GridSpec::standard());
        board.place_clue(0, Value::V5).unwrap();
        let before = board.clone();

        let row_peer = board.spec().cell_id(Position::new(0, 8));
        assert!(board.place_clue(row_peer, Value::V5).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_values_excludes_all_three_groups() {
        let mut board = Board::new(GridSpec::standard());
        // Row 0 gets V1, column 4 gets V2, block 1 (around (1, 4)) gets V3.
        board
            .place_clue(board.spec().cell_id(Position::new(0, 0)), Value::V1)
            .unwrap();
        board
            .place_clue(board.spec().cell_id(Position::new(8, 4)), Value::V2)
            .unwrap();
        board
            .place_clue(board.spec().cell_id(Position::new(2, 5)), Value::V3)
            .unwrap();

        let legal = board.legal_values(board.spec().cell_id(Position::new(0, 4)));
        assert!(!legal.contains(Value::V1));
        assert!(!legal.contains(Value::V2));
        assert!(!legal.contains(Value::V3));
        assert_eq!(legal.len(), 6);
    }

    #[test]
    fn test_legal_values_for_unknown_cell_is_empty() {
        let board = Board::new(GridSpec::standard());
        assert!(board.legal_values(500).is_empty());
    }
}
