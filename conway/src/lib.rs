//! Transition engine for a per-cell Game of Life.
//!
//! Nothing here holds state between calls: a cell's next state is a pure
//! function of its current state and its neighbors' states.

pub mod cell;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use cell::{CellState, ParseCellError, is_placeholder};
pub use grid::{Board, DEFAULT_DENSITY, DEFAULT_GRID_SIZE, Position, neighbor_positions};
pub use patterns::{PATTERNS, Pattern, find_pattern};
pub use rules::{alive_count, compute_next_state, next_state};
