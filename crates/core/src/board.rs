//! Board module - manages the game grid.
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a
//! player's piece. Dimensions are runtime values because a board rotation
//! swaps them, so storage is a flat `Vec` in row-major order.
//! Coordinates: (row, col) with row 0 at the top.

use gravity_four_types::{Cell, Player, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIM};

use crate::error::MoveError;

/// The game board - flat row-major cell storage plus live dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: u8,
    cols: u8,
}

impl Board {
    /// Create a new all-empty board.
    ///
    /// Both dimensions must be in `1..=MAX_DIM`: rotation swaps the axes,
    /// the wire codes 7 and 8 are reserved above every legal drop column,
    /// and the gravity compaction buffer is sized to `MAX_DIM`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or exceeds [`MAX_DIM`].
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(
            (1..=MAX_DIM).contains(&rows) && (1..=MAX_DIM).contains(&cols),
            "board dimensions {rows}x{cols} outside 1..={MAX_DIM}"
        );
        Self {
            cells: vec![None; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline(always)]
    fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    ///
    /// Crate-internal: all mutation goes through the drop, rotation and
    /// gravity paths, which maintain the gravity invariant between moves.
    pub(crate) fn set(&mut self, row: u8, col: u8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled).
    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Greatest row index whose cell is empty in `col`, or None when the
    /// column is full. Out-of-range columns also return None.
    pub fn lowest_open_row(&self, col: u8) -> Option<u8> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| matches!(self.get(row, col), Some(None)))
    }

    /// Drop a piece into `col` for `player`.
    ///
    /// Returns the (row, col) where the piece landed, needed for win-line
    /// highlighting. On error the board is byte-for-byte unchanged.
    /// This is the only operation that adds a piece to the board.
    pub fn drop_piece(&mut self, player: Player, col: u8) -> Result<(u8, u8), MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfBounds {
                column: col,
                cols: self.cols,
            });
        }
        let row = self
            .lowest_open_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.set(row, col, Some(player));
        Ok((row, col))
    }

    /// True when no cell is empty across the live `rows x cols`.
    ///
    /// The scan must use the live column count: after a rotation the axis
    /// lengths differ from the starting ones.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells in `col`, scanning the live row count.
    pub fn column_count(&self, col: u8) -> u8 {
        (0..self.rows)
            .filter(|&row| self.is_occupied(row, col))
            .count() as u8
    }

    /// Get a reference to the internal cells slice (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from per-row cell vectors (row 0 first).
    ///
    /// Used by tests and by callers that reconstruct a board from a
    /// synchronized state. Panics if the rows are ragged or the
    /// dimensions fall outside `1..=MAX_DIM`.
    pub fn from_rows(rows_2d: Vec<Vec<Cell>>) -> Self {
        let rows = rows_2d.len() as u8;
        let cols = rows_2d.first().map(|r| r.len()).unwrap_or(0) as u8;
        assert!(rows_2d.iter().all(|r| r.len() == cols as usize));

        let mut board = Self::new(rows, cols);
        board.cells = rows_2d.into_iter().flatten().collect();
        board
    }

    /// Convert to per-row cell vectors for inspection and display.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let cols = self.cols as usize;
        (0..self.rows as usize)
            .map(|row| self.cells[row * cols..(row + 1) * cols].to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
