//! Grid and tile data structures
//!
//! This module contains the board-model functionality:
//! - Rectangular grid storage with dynamic resizing
//! - Bounds-checked single-cell access
//! - Coordinate-tagged tile cells and the cell trait

/// Rectangular grid storage, resizing, and cell access
pub mod grid;
/// Tile cells and the trait grids require from their cells
pub mod tile;

pub use grid::Grid;
pub use tile::{GridCell, Tile};
