//! The falling piece and its transformations.
//!
//! A piece carries its own full-width column masks (same layout as the board)
//! plus the column/row offsets of its 4x4 shape box. Every transformation is
//! all-or-nothing: the query runs first against the board, and the piece state
//! only changes when the whole move is legal.

use matrix_tetris_types::{Rotation, ShapeKind, BASE_ROW, MATRIX_COLS, SPAWN_COL};

use crate::board::Board;
use crate::collision::{can_translate, rotation_candidate, Side};
use crate::shapes::shape_columns;

/// The active falling tetromino.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    rotation: Rotation,
    cols: [u32; MATRIX_COLS],
    /// Columns moved from the spawn position (negative = left).
    col_offset: i8,
    /// Rows descended since spawn.
    row: u32,
}

impl Piece {
    /// Spawn a piece at the top of the board.
    ///
    /// Returns `None` when any spawn cell is already occupied; the caller
    /// treats that as the game-over signal, not a fault.
    pub fn spawn(board: &Board, kind: ShapeKind) -> Option<Self> {
        let cols = Self::place(kind, Rotation::North, 0, 0)?;
        if overlaps(board, &cols) {
            return None;
        }
        Some(Self {
            kind,
            rotation: Rotation::North,
            cols,
            col_offset: 0,
            row: 0,
        })
    }

    /// Build full-width column masks for a shape box at the given offsets.
    ///
    /// `None` when an occupied template column would land outside the board
    /// (wall bound, including the narrower bound for variants whose extreme
    /// columns are empty) or the row shift would push cells past the floor.
    pub(crate) fn place(
        kind: ShapeKind,
        rotation: Rotation,
        col_offset: i8,
        row: u32,
    ) -> Option<[u32; MATRIX_COLS]> {
        let template = shape_columns(kind, rotation);
        let origin = SPAWN_COL as i32 + col_offset as i32;
        let shift = BASE_ROW + row;
        if shift >= u32::BITS {
            return None;
        }

        let mut cols = [0u32; MATRIX_COLS];
        for (i, &bits) in template.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let col = origin + i as i32;
            if col < 0 || col >= MATRIX_COLS as i32 {
                return None;
            }
            let shifted = bits << shift;
            if shifted >> shift != bits {
                return None;
            }
            cols[col as usize] = shifted;
        }
        Some(cols)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn col_offset(&self) -> i8 {
        self.col_offset
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn cols(&self) -> &[u32; MATRIX_COLS] {
        &self.cols
    }

    #[inline(always)]
    pub fn column(&self, col: usize) -> u32 {
        self.cols[col]
    }

    /// Advance one row of vertical fall. The caller must have established via
    /// [`crate::collision::probe_descent`] that the row below is free.
    pub fn descend(&mut self) {
        for col in &mut self.cols {
            *col <<= 1;
        }
        self.row += 1;
    }

    /// Move one column left. No state change when the piece touches the left
    /// edge or the destination cells are occupied.
    pub fn shift_left(&mut self, board: &Board) -> bool {
        if !can_translate(board, self, Side::Left) {
            return false;
        }
        for col in 0..MATRIX_COLS - 1 {
            self.cols[col] = self.cols[col + 1];
        }
        self.cols[MATRIX_COLS - 1] = 0;
        self.col_offset -= 1;
        true
    }

    /// Move one column right. Mirror of [`Piece::shift_left`].
    pub fn shift_right(&mut self, board: &Board) -> bool {
        if !can_translate(board, self, Side::Right) {
            return false;
        }
        for col in (1..MATRIX_COLS).rev() {
            self.cols[col] = self.cols[col - 1];
        }
        self.cols[0] = 0;
        self.col_offset += 1;
        true
    }

    /// Rotate clockwise. The candidate replaces the piece atomically; a
    /// rejected rotation is a silent no-op (no wall kicks are attempted).
    pub fn rotate_cw(&mut self, board: &Board) -> bool {
        self.rotate_to(board, self.rotation.cw())
    }

    /// Rotate counter-clockwise.
    pub fn rotate_ccw(&mut self, board: &Board) -> bool {
        self.rotate_to(board, self.rotation.ccw())
    }

    fn rotate_to(&mut self, board: &Board, next: Rotation) -> bool {
        match rotation_candidate(board, self, next) {
            Some(cols) => {
                self.cols = cols;
                self.rotation = next;
                true
            }
            None => false,
        }
    }

    /// Drop as far as the board allows in one atomic step.
    ///
    /// Each occupied column is scanned for its own clearance (rows until it
    /// meets the stack or the floor); the minimum across columns is the global
    /// drop distance. Returns that distance, usable for scoring.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut distance = u32::BITS;
        for (c, &bits) in self.cols.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let floor = bits.leading_zeros();
            let mut clearance = floor;
            for step in 1..=floor {
                if board.column(c) & (bits << step) != 0 {
                    clearance = step - 1;
                    break;
                }
            }
            distance = distance.min(clearance);
        }

        if distance == 0 || distance == u32::BITS {
            return 0;
        }
        for col in &mut self.cols {
            *col <<= distance;
        }
        self.row += distance;
        distance
    }
}

fn overlaps(board: &Board, cols: &[u32; MATRIX_COLS]) -> bool {
    cols.iter()
        .enumerate()
        .any(|(c, &bits)| board.column(c) & bits != 0)
}
