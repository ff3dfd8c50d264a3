//! Clue placement.

use cluegrid_core::{Board, CellId, GridSpec, PlaceError};
use log::{debug, trace};
use rand::RngExt as _;

use crate::seed::GeneratorSeed;

/// Places a configurable number of clues on a blank board.
///
/// Cells are chosen uniformly at random among those not yet chosen, and
/// each receives a value chosen uniformly among the values its row, column,
/// and block still admit. A cell whose three groups already cover all nine
/// values is retired: placements only ever shrink legal sets, so such a
/// cell can never become placeable again. If every cell is placed or
/// retired before the requested count is reached, generation fails with a
/// typed error instead of retrying forever.
///
/// # Examples
///
/// ```
/// use cluegrid_core::GridSpec;
/// use cluegrid_generator::{ClueGenerator, GeneratorSeed};
///
/// let generator = ClueGenerator::new(GridSpec::standard());
/// let seed = GeneratorSeed::from_phrase("doc example");
/// let generated = generator.generate_with_seed(seed).unwrap();
///
/// let fixed = generated
///     .board
///     .grid()
///     .cells()
///     .iter()
///     .filter(|cell| cell.is_disabled())
///     .count();
/// assert_eq!(fixed, ClueGenerator::DEFAULT_CLUE_COUNT);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClueGenerator {
    spec: GridSpec,
    clue_count: usize,
}

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The board with its clues placed and their cells disabled.
    pub board: Board,
    /// The seed that reproduces this board.
    pub seed: GeneratorSeed,
}

/// Errors from a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// More clues were requested than the grid has cells.
    #[display("requested {requested} clues but the grid has only {capacity} cells")]
    #[from(skip)]
    TooManyClues {
        /// Requested clue count.
        requested: usize,
        /// Total cell count of the grid.
        capacity: usize,
    },
    /// Every remaining cell ran out of legal values.
    #[display("generation starved after placing {placed} of {requested} clues")]
    #[from(skip)]
    Starved {
        /// Clues placed before starvation.
        placed: usize,
        /// Requested clue count.
        requested: usize,
    },
    /// Constraint bookkeeping rejected a placement.
    #[display("placement rejected: {_0}")]
    Placement(#[from] PlaceError),
}

impl ClueGenerator {
    /// Clue count used when the caller does not pick one.
    pub const DEFAULT_CLUE_COUNT: usize = 10;

    /// Creates a generator for the given layout with the default clue count.
    #[must_use]
    pub const fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            clue_count: Self::DEFAULT_CLUE_COUNT,
        }
    }

    /// Sets the number of clues to place.
    #[must_use]
    pub const fn clue_count(mut self, clue_count: usize) -> Self {
        self.clue_count = clue_count;
        self
    }

    /// Generates a board from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(GeneratorSeed::random(&mut rand::rng()))
    }

    /// Generates a board deterministically from the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TooManyClues`] if the requested count
    /// exceeds the grid's cell count, and [`GenerateError::Starved`] if the
    /// constraint groups saturate before the requested count is reached.
    pub fn generate_with_seed(&self, seed: GeneratorSeed) -> Result<GeneratedBoard, GenerateError> {
        let capacity = self.spec.cell_count();
        if self.clue_count > capacity {
            return Err(GenerateError::TooManyClues {
                requested: self.clue_count,
                capacity,
            });
        }

        let mut rng = seed.rng();
        let mut board = Board::new(self.spec);
        let mut pool: Vec<CellId> = (0..capacity).collect();
        let mut placed = 0;

        while placed < self.clue_count {
            if pool.is_empty() {
                debug!(
                    "generation starved: {placed} of {} clues placed (seed {seed})",
                    self.clue_count
                );
                return Err(GenerateError::Starved {
                    placed,
                    requested: self.clue_count,
                });
            }

            let slot = rng.random_range(0..pool.len());
            let id = pool.swap_remove(slot);

            let legal = board.legal_values(id);
            if legal.is_empty() {
                // Legal sets only shrink, so this cell is out for good.
                trace!("cell {id} has no legal value left, retiring it");
                continue;
            }

            let choice = rng.random_range(0..legal.len());
            let value = legal
                .iter()
                .nth(choice)
                .expect("choice is within the legal set");
            board.place_clue(id, value)?;
            trace!("placed {value} at cell {id}");
            placed += 1;
        }

        debug!("generated board with {placed} clues from seed {seed}");
        Ok(GeneratedBoard { board, seed })
    }
}
