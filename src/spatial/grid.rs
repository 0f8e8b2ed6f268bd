//! Rectangular grid storage with dynamic resizing and bounds-checked access
//!
//! The grid owns one cell per position and keeps its storage rectangular
//! through every structural change: jagged input is padded at construction,
//! and resizing preserves surviving cells while filling newly exposed
//! positions through the cell's fill factory.

use crate::error::{Result, non_positive, out_of_bounds};
use crate::spatial::tile::{GridCell, Tile};

/// A rectangular, resizable matrix owning one cell per position
///
/// Dimensions are tracked as signed integers so that sizing and access
/// errors can report the offending value verbatim; indices are converted to
/// storage positions only after bounds validation. Coordinate handling is
/// deliberately asymmetric: bulk replacement ([`Grid::set_tiles`]) restores
/// rectangularity but leaves pre-existing cell coordinates untouched, while
/// single placement ([`Grid::set_tile_at`]) rewrites the cell's coordinates
/// to its new position.
#[derive(Debug, Clone)]
pub struct Grid<T = Tile> {
    tiles: Vec<Vec<T>>,
    rows: i32,
    columns: i32,
}

impl<T: GridCell> Grid<T> {
    /// Create a grid of the given dimensions, each cell built by
    /// [`GridCell::fill_at`] with its own position
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::NonPositiveValue`] when `columns` or
    /// `rows` is zero or negative; the column count is validated first.
    pub fn new(rows: i32, columns: i32) -> Result<Self> {
        if columns <= 0 {
            return Err(non_positive("columns", columns));
        }
        if rows <= 0 {
            return Err(non_positive("rows", rows));
        }

        let mut tiles = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let mut cells = Vec::with_capacity(columns as usize);
            for column in 0..columns {
                cells.push(T::fill_at(row, column));
            }
            tiles.push(cells);
        }

        Ok(Self {
            tiles,
            rows,
            columns,
        })
    }

    /// Build a grid from explicit rows of cells
    ///
    /// Rows may have differing lengths; the column count becomes the longest
    /// row length and shorter rows are padded at the tail with
    /// [`GridCell::fill_at`] cells. Supplied cells are stored as-is, their
    /// coordinates are not rewritten to match their position. An input with
    /// no rows yields a 0x0 grid without error, unlike [`Grid::new`].
    pub fn from_tiles(tiles: Vec<Vec<T>>) -> Self {
        let mut grid = Self {
            tiles: Vec::new(),
            rows: 0,
            columns: 0,
        };
        grid.set_tiles(tiles);
        grid
    }

    /// Read-only view of the backing rows
    ///
    /// Cells are mutated through [`Grid::tile_at_mut`] rather than through
    /// this view, which keeps the storage rectangular.
    pub fn tiles(&self) -> &[Vec<T>] {
        &self.tiles
    }

    /// Current number of rows
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Current number of columns
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// Replace the backing matrix, re-deriving both dimensions
    ///
    /// Normalizes exactly like [`Grid::from_tiles`]: short rows are padded
    /// with fill cells, pre-existing cell coordinates are left untouched,
    /// and an empty input silently produces a 0x0 grid.
    pub fn set_tiles(&mut self, tiles: Vec<Vec<T>>) -> &mut Self {
        self.tiles = tiles;
        self.rows = self.tiles.len() as i32;
        self.columns = self.tiles.iter().map(Vec::len).max().unwrap_or(0) as i32;

        let columns = self.columns as usize;
        for (row, cells) in self.tiles.iter_mut().enumerate() {
            for column in cells.len()..columns {
                cells.push(T::fill_at(row as i32, column as i32));
            }
        }

        self
    }

    /// Set the number of rows, keeping the current column count
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::NonPositiveValue`] when `rows` is zero or
    /// negative; the grid is left unchanged.
    pub fn set_rows(&mut self, rows: i32) -> Result<&mut Self> {
        self.resize(rows, self.columns)
    }

    /// Set the number of columns, keeping the current row count
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::NonPositiveValue`] when `columns` is zero
    /// or negative; the grid is left unchanged.
    pub fn set_columns(&mut self, columns: i32) -> Result<&mut Self> {
        self.resize(self.rows, columns)
    }

    /// Resize the grid to the given dimensions
    ///
    /// Surviving cells are preserved untouched. Newly exposed positions are
    /// filled with [`GridCell::fill_at`] cells carrying their own
    /// coordinates; trailing rows and cells outside the new bounds are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::NonPositiveValue`] when `rows` or
    /// `columns` is zero or negative; the row count is validated first and
    /// the grid is left unchanged.
    pub fn resize(&mut self, rows: i32, columns: i32) -> Result<&mut Self> {
        if rows <= 0 {
            return Err(non_positive("rows", rows));
        }
        if columns <= 0 {
            return Err(non_positive("columns", columns));
        }

        let target_columns = columns as usize;
        self.tiles.resize_with(rows as usize, Vec::new);

        for (row, cells) in self.tiles.iter_mut().enumerate() {
            cells.truncate(target_columns);
            for column in cells.len()..target_columns {
                cells.push(T::fill_at(row as i32, column as i32));
            }
        }

        self.rows = rows;
        self.columns = columns;

        Ok(self)
    }

    /// Shared reference to the cell at the given position
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] when `row` or `column`
    /// falls outside the current dimensions; the row bound is checked first.
    pub fn tile_at(&self, row: i32, column: i32) -> Result<&T> {
        let row_index = self.row_index(row)?;
        let column_index = self.column_index(column)?;

        let cells = self
            .tiles
            .get(row_index)
            .ok_or(out_of_bounds("row", row, self.rows))?;
        cells
            .get(column_index)
            .ok_or(out_of_bounds("column", column, self.columns))
    }

    /// Mutable reference to the cell at the given position
    ///
    /// Mutation through the returned reference is immediately visible in the
    /// grid; no consistency between the cell's coordinates and its position
    /// is enforced afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] when `row` or `column`
    /// falls outside the current dimensions; the row bound is checked first.
    pub fn tile_at_mut(&mut self, row: i32, column: i32) -> Result<&mut T> {
        let row_index = self.row_index(row)?;
        let column_index = self.column_index(column)?;

        let cells = self
            .tiles
            .get_mut(row_index)
            .ok_or(out_of_bounds("row", row, self.rows))?;
        cells
            .get_mut(column_index)
            .ok_or(out_of_bounds("column", column, self.columns))
    }

    /// Place a cell at the given position, replacing the previous occupant
    ///
    /// The incoming cell is re-tagged with the target coordinates before it
    /// is stored, overwriting whatever coordinates it previously held.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::IndexOutOfBounds`] when `row` or `column`
    /// falls outside the current dimensions; the row bound is checked first
    /// and no mutation occurs on failure.
    pub fn set_tile_at(&mut self, mut tile: T, row: i32, column: i32) -> Result<&mut Self> {
        let row_index = self.row_index(row)?;
        let column_index = self.column_index(column)?;

        tile.set_row(row).set_column(column);

        let cells = self
            .tiles
            .get_mut(row_index)
            .ok_or(out_of_bounds("row", row, self.rows))?;
        let slot = cells
            .get_mut(column_index)
            .ok_or(out_of_bounds("column", column, self.columns))?;
        *slot = tile;

        Ok(self)
    }

    const fn row_index(&self, row: i32) -> Result<usize> {
        if row < 0 || row >= self.rows {
            return Err(out_of_bounds("row", row, self.rows));
        }
        Ok(row as usize)
    }

    const fn column_index(&self, column: i32) -> Result<usize> {
        if column < 0 || column >= self.columns {
            return Err(out_of_bounds("column", column, self.columns));
        }
        Ok(column as usize)
    }
}
