//! Core data structures for constraint-grid applications.
//!
//! This crate provides the grid model shared by generation and navigation
//! components: cells with derived coordinates, per-group value bookkeeping,
//! and validated grid geometry.
//!
//! # Overview
//!
//! The crate is organized around three layers:
//!
//! 1. **Scalar types**
//!    - [`value`]: Type-safe representation of placeable values 1-9
//!    - [`position`]: Zero-based (row, column) coordinates
//! 2. **Cell-level types**
//!    - [`cell`]: One grid position with an optional value and state flags
//!    - [`value_set`]: A compact set of values for group bookkeeping
//! 3. **Grid-level types**
//!    - [`spec`]: Validated grid dimensions and block geometry
//!    - [`grid`]: The row-major cell sequence with indexed coordinate lookup
//!    - [`group`]: Per-row/column/block value tracking
//!    - [`board`]: Grid plus constraint groups, with placement operations
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::{Board, GridSpec, Position, Value};
//!
//! let mut board = Board::new(GridSpec::standard());
//!
//! // Fix a value; the matching row, column, and block groups record it.
//! let id = board
//!     .grid()
//!     .cell_at(Position::new(4, 4))
//!     .map(|cell| cell.id())
//!     .unwrap();
//! board.place_clue(id, Value::V5).unwrap();
//!
//! // The value is no longer legal anywhere in that row.
//! let peer = board.grid().cell_at(Position::new(4, 7)).unwrap();
//! assert!(!board.legal_values(peer.id()).contains(Value::V5));
//! ```

pub mod board;
pub mod cell;
pub mod grid;
pub mod group;
pub mod position;
pub mod spec;
pub mod value;
pub mod value_set;

// Re-export commonly used types
pub use self::{
    board::{Board, PlaceError},
    cell::{Cell, CellFlags, CellId},
    grid::Grid,
    group::{Group, GroupKind},
    position::Position,
    spec::{GridSpec, GridSpecError},
    value::Value,
    value_set::ValueSet,
};
