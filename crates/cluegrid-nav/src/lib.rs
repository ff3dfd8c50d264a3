//! Cursor navigation over a constraint grid.
//!
//! This crate computes where cell focus should land in response to
//! directional input: a closed set of [`Direction`]s with wrap-around
//! coordinate transforms, and [`next_cell`], which sweeps in a direction
//! until it finds a cell the generator has not fixed.
//!
//! Navigation only reads the grid; it never mutates any state.
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::{Grid, GridSpec};
//! use cluegrid_nav::{Direction, next_cell};
//!
//! let grid = Grid::new(GridSpec::standard());
//!
//! // Key identifiers map to directions; anything else is no action.
//! let direction = Direction::from_key("ArrowRight").unwrap();
//! assert_eq!(Direction::from_key("Enter"), None);
//!
//! // On a blank grid the neighbor is one step away, wrapping at edges.
//! assert_eq!(next_cell(&grid, 0, direction), Some(1));
//! assert_eq!(next_cell(&grid, 8, direction), Some(0));
//! ```

pub mod cursor;
pub mod direction;

pub use self::{cursor::next_cell, direction::Direction};
