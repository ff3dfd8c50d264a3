//! Seeded clue generation for constraint grids.
//!
//! This crate places a configurable number of clues on a blank
//! [`Board`](cluegrid_core::Board), keeping every placement consistent with
//! the board's row, column, and block groups and marking each clue cell
//! disabled. Generation is driven by an explicit [`GeneratorSeed`], so any
//! board can be reproduced from its printable seed.
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::GridSpec;
//! use cluegrid_generator::{ClueGenerator, GeneratorSeed};
//!
//! let generator = ClueGenerator::new(GridSpec::standard()).clue_count(24);
//!
//! // Fresh random board
//! let generated = generator.generate().unwrap();
//!
//! // The same seed reproduces the same board
//! let again = generator.generate_with_seed(generated.seed).unwrap();
//! assert_eq!(generated.board, again.board);
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{ClueGenerator, GenerateError, GeneratedBoard},
    seed::{GeneratorSeed, SeedParseError},
};
