//! Coordinate-tagged cells and the trait grids use to create and re-tag them

/// Behavior a grid requires from its cells
///
/// A grid builds cells through [`GridCell::fill_at`] whenever a structural
/// change exposes a new position, and rewrites coordinates through the
/// setters when a cell is placed explicitly. Implement this trait on a
/// richer type (mine flags, marks, ownership) to reuse the grid mechanics
/// with a game-specific payload.
pub trait GridCell: Sized {
    /// Build the cell a grid inserts at a newly exposed position
    fn fill_at(row: i32, column: i32) -> Self;

    /// Current row coordinate
    fn row(&self) -> i32;

    /// Current column coordinate
    fn column(&self) -> i32;

    /// Set the row coordinate, returning the cell for chaining
    ///
    /// Accepts any value, including negatives; keeping coordinates
    /// consistent with the cell's actual position is the owning grid's job.
    fn set_row(&mut self, row: i32) -> &mut Self;

    /// Set the column coordinate, returning the cell for chaining
    ///
    /// Unvalidated, like [`GridCell::set_row`].
    fn set_column(&mut self, column: i32) -> &mut Self;
}

/// A cell holding nothing but its own grid position
///
/// Two tiles are equal when both coordinates match, and equal tiles hash
/// alike. The default cell type for [`crate::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    row: i32,
    column: i32,
}

impl Tile {
    /// Create a tile at the given coordinates
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl GridCell for Tile {
    fn fill_at(row: i32, column: i32) -> Self {
        Self::new(row, column)
    }

    fn row(&self) -> i32 {
        self.row
    }

    fn column(&self) -> i32 {
        self.column
    }

    fn set_row(&mut self, row: i32) -> &mut Self {
        self.row = row;
        self
    }

    fn set_column(&mut self, column: i32) -> &mut Self {
        self.column = column;
        self
    }
}
