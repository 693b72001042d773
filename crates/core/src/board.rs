//! Board - the bit-packed playfield.
//!
//! One `u32` per matrix column; bit `i` of column `c` set means cell
//! (row `i`, column `c`) is permanently occupied. Bit 0 is the top row, so a
//! one-row fall is a left shift and the floor is bit 31. The board only holds
//! locked material; the falling piece is composed in at render time.

use arrayvec::ArrayVec;

use matrix_tetris_types::{BASE_ROW, MATRIX_COLS};

use crate::piece::Piece;

/// Bits that must stay clear for a new piece to have room to enter.
const SPAWN_GUARD_MASK: u32 = (1 << (BASE_ROW + 1)) - 1;

/// The playfield, 16 columns of 32 rows each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: [u32; MATRIX_COLS],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cols: [0; MATRIX_COLS],
        }
    }

    /// Build a board from raw column masks.
    pub fn from_cols(cols: [u32; MATRIX_COLS]) -> Self {
        Self { cols }
    }

    pub fn cols(&self) -> &[u32; MATRIX_COLS] {
        &self.cols
    }

    /// Bitmask of a single column.
    #[inline(always)]
    pub fn column(&self, col: usize) -> u32 {
        self.cols[col]
    }

    /// Whether the cell at (row, col) is occupied.
    pub fn cell(&self, col: usize, row: u32) -> bool {
        self.cols[col] & (1 << row) != 0
    }

    /// Occupy a single cell. Test scaffolding and board setup only; gameplay
    /// mutates the board exclusively through [`Board::merge`].
    pub fn set_cell(&mut self, col: usize, row: u32) {
        self.cols[col] |= 1 << row;
    }

    pub fn is_empty(&self) -> bool {
        self.cols.iter().all(|&c| c == 0)
    }

    /// Total number of occupied cells.
    pub fn occupied_cells(&self) -> u32 {
        self.cols.iter().map(|c| c.count_ones()).sum()
    }

    /// Permanently fix a piece into the board (bitwise OR of every column).
    pub fn merge(&mut self, piece: &Piece) {
        for (col, bits) in self.cols.iter_mut().zip(piece.cols()) {
            *col |= bits;
        }
    }

    /// Rows occupied in every column simultaneously.
    pub fn full_row_mask(&self) -> u32 {
        self.cols.iter().fold(u32::MAX, |acc, &c| acc & c)
    }

    /// Clear every full row and compact the stack downward.
    ///
    /// The full-row mask is computed once (AND across all columns). Cleared
    /// rows are processed from the lowest bit index to the highest: for each,
    /// the bits above the cleared row (numerically below it) shift down by one
    /// in every column while the rows underneath stay put. Because each pass
    /// re-shifts the already-compacted region, k simultaneous full rows drop
    /// the material above them by k rows total.
    ///
    /// Returns the cleared row indices in ascending order (a tetromino can
    /// complete at most four rows at once); empty when no row is full, in
    /// which case the call leaves the board bitwise identical.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u32, 4> {
        let mut cleared = ArrayVec::new();
        let full = self.full_row_mask();
        if full == 0 {
            return cleared;
        }

        for col in &mut self.cols {
            *col &= !full;
        }

        for row in 0..u32::BITS {
            if full & (1 << row) != 0 {
                let above = (1u32 << row) - 1;
                for col in &mut self.cols {
                    *col = (*col & !above) | ((*col & above) << 1);
                }
                if !cleared.is_full() {
                    cleared.push(row);
                }
            }
        }

        cleared
    }

    /// Whether locked material has grown into the spawn guard band.
    /// This is the post-clear game-over condition.
    pub fn intrudes_spawn_guard(&self) -> bool {
        self.cols.iter().any(|&c| c & SPAWN_GUARD_MASK != 0)
    }

    /// Reset the board for a new session.
    pub fn clear(&mut self) {
        self.cols = [0; MATRIX_COLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
