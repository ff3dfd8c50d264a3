//! Disabled-cell-skipping cursor movement.

use cluegrid_core::{CellId, Grid};

use crate::direction::Direction;

/// Computes the next cell to focus when moving from `from` in `direction`.
///
/// The transform is applied repeatedly, each step continuing from the
/// previous candidate rather than the origin, skipping cells the generator
/// fixed. The sweep visits at most one full grid's worth of coordinates:
/// wrap-around keeps every candidate in bounds, so the only way to come up
/// empty is an orbit where every cell is disabled, and that returns `None`
/// rather than cycling forever.
///
/// Also returns `None` if `from` does not identify a cell.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Board, GridSpec, Value};
/// use cluegrid_nav::{Direction, next_cell};
///
/// let mut board = Board::new(GridSpec::standard());
/// board.place_clue(1, Value::V4).unwrap();
///
/// // Moving right from cell 0 skips the fixed cell 1 and lands on 2.
/// assert_eq!(next_cell(board.grid(), 0, Direction::Right), Some(2));
/// ```
#[must_use]
pub fn next_cell(grid: &Grid, from: CellId, direction: Direction) -> Option<CellId> {
    let spec = grid.spec();
    let mut position = direction.step(grid.cell(from)?.position(), spec);
    for _ in 0..spec.cell_count() {
        let cell = grid.cell_at(position)?;
        if !cell.is_disabled() {
            return Some(cell.id());
        }
        position = direction.step(position, spec);
    }
    None
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{Board, GridSpec, Position, Value};
    use cluegrid_generator::{ClueGenerator, GeneratorSeed};

    use super::*;
    use crate::direction::Direction;

    fn id_at(board: &Board, row: u8, column: u8) -> CellId {
        board
            .cell_at(Position::new(row, column))
            .map(|cell| cell.id())
            .unwrap()
    }

    #[test]
    fn test_moves_one_step_on_blank_grid() {
        let board = Board::new(GridSpec::standard());
        let from = id_at(&board, 4, 4);
        assert_eq!(
            next_cell(board.grid(), from, Direction::Right),
            Some(id_at(&board, 4, 5))
        );
        assert_eq!(
            next_cell(board.grid(), from, Direction::Up),
            Some(id_at(&board, 3, 4))
        );
    }

    #[test]
    fn test_skips_consecutive_disabled_cells() {
        let mut board = Board::new(GridSpec::standard());
        board.place_clue(id_at(&board, 0, 1), Value::V1).unwrap();
        board.place_clue(id_at(&board, 0, 2), Value::V2).unwrap();

        let from = id_at(&board, 0, 0);
        assert_eq!(
            next_cell(board.grid(), from, Direction::Right),
            Some(id_at(&board, 0, 3))
        );
    }

    #[test]
    fn test_skip_wraps_past_the_edge() {
        let mut board = Board::new(GridSpec::standard());
        board.place_clue(id_at(&board, 0, 8), Value::V1).unwrap();

        // Moving right from (0, 7) skips the disabled edge cell and wraps
        // to the start of the row.
        let from = id_at(&board, 0, 7);
        assert_eq!(
            next_cell(board.grid(), from, Direction::Right),
            Some(id_at(&board, 0, 0))
        );
    }

    #[test]
    fn test_returns_origin_when_rest_of_orbit_is_disabled() {
        let mut board = Board::new(GridSpec::standard());
        for (column, value) in (1..9).zip(Value::ALL) {
            board.place_clue(id_at(&board, 0, column), value).unwrap();
        }

        // Every other cell in row 0 is fixed, so the sweep comes back
        // around to the origin.
        let from = id_at(&board, 0, 0);
        assert_eq!(next_cell(board.grid(), from, Direction::Right), Some(from));
    }

    #[test]
    fn test_fully_disabled_orbit_is_none() {
        let mut board = Board::new(GridSpec::standard());
        for (column, value) in (0..9).zip(Value::ALL) {
            board.place_clue(id_at(&board, 0, column), value).unwrap();
        }

        let from = id_at(&board, 0, 0);
        assert_eq!(next_cell(board.grid(), from, Direction::Right), None);
        assert_eq!(next_cell(board.grid(), from, Direction::Left), None);
    }

    #[test]
    fn test_unknown_origin_is_none() {
        let board = Board::new(GridSpec::standard());
        assert_eq!(next_cell(board.grid(), 81, Direction::Down), None);
    }

    #[test]
    fn test_never_lands_on_a_generated_clue() {
        let seed = GeneratorSeed::from_phrase("navigation sweep");
        let generated = ClueGenerator::new(GridSpec::standard())
            .clue_count(30)
            .generate_with_seed(seed)
            .unwrap();

        let grid = generated.board.grid();
        for cell in grid.cells() {
            for direction in Direction::ALL {
                if let Some(target) = next_cell(grid, cell.id(), direction) {
                    assert!(!grid.cell(target).unwrap().is_disabled());
                }
            }
        }
    }
}
