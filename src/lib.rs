//! Rectangular, resizable grid of positioned tiles for grid-based games
//!
//! The crate models a board as a matrix of coordinate-tagged cells. Grids
//! normalize jagged input into rectangular storage, stay rectangular through
//! every structural change, and bounds-check all single-cell access. Game
//! rules, cell payloads, and rendering belong to the layer above; richer
//! cells plug in through the [`spatial::GridCell`] trait.

#![forbid(unsafe_code)]

/// Error types for grid sizing and cell access
pub mod error;
/// Grid storage, resizing, and tile cell types
pub mod spatial;

pub use error::{GridError, Result};
pub use spatial::{Grid, GridCell, Tile};
