//! Collision engine - pure occupancy queries.
//!
//! Every function here answers "could the piece occupy that position" without
//! mutating anything; the transformations in [`crate::piece`] are built on
//! top of these answers.

use matrix_tetris_types::{Rotation, MATRIX_COLS};

use crate::board::Board;
use crate::piece::Piece;

/// Outcome of probing one row of descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The row below is free.
    Clear,
    /// The piece rests on the bottom row of the matrix.
    Floor,
    /// Descending would overlap locked material; `stop_row` is the last legal
    /// row (minimum across columns).
    Blocked { stop_row: u32 },
}

impl Descent {
    /// Whether this outcome locks the piece in place.
    pub fn is_stop(self) -> bool {
        !matches!(self, Descent::Clear)
    }
}

/// Horizontal translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Probe one row of descent for the piece.
///
/// Per column, the overlap is `board & (piece << 1)`. Any overlap reports the
/// row above the lowest colliding bit as that column's last legal row, and the
/// minimum across columns is the global stop row. A column whose bottom bit
/// already sits on row 31 with no overlap reports the floor, which is
/// distinguished from a structural collision.
pub fn probe_descent(board: &Board, piece: &Piece) -> Descent {
    let mut stop_row: Option<u32> = None;
    let mut at_floor = false;

    for (col, &bits) in piece.cols().iter().enumerate() {
        if bits == 0 {
            continue;
        }
        let overlap = board.column(col) & (bits << 1);
        if overlap != 0 {
            let row = overlap.trailing_zeros().saturating_sub(1);
            stop_row = Some(stop_row.map_or(row, |prev| prev.min(row)));
        } else if bits & (1 << 31) != 0 {
            at_floor = true;
        }
    }

    match stop_row {
        Some(stop_row) => Descent::Blocked { stop_row },
        None if at_floor => Descent::Floor,
        None => Descent::Clear,
    }
}

/// Whether the piece may move one column toward `side`.
///
/// Legal only when the piece's leading edge column is empty (it would exit
/// the board otherwise) and no shifted column overlaps the board.
pub fn can_translate(board: &Board, piece: &Piece, side: Side) -> bool {
    let cols = piece.cols();
    match side {
        Side::Left => {
            cols[0] == 0
                && (0..MATRIX_COLS - 1).all(|c| board.column(c) & cols[c + 1] == 0)
        }
        Side::Right => {
            cols[MATRIX_COLS - 1] == 0
                && (1..MATRIX_COLS).all(|c| board.column(c) & cols[c - 1] == 0)
        }
    }
}

/// Build the column masks the piece would have in `next` rotation at its
/// current offsets.
///
/// `None` when the target variant exceeds the wall bounds or overlaps the
/// board; the caller applies an accepted candidate atomically.
pub fn rotation_candidate(
    board: &Board,
    piece: &Piece,
    next: Rotation,
) -> Option<[u32; MATRIX_COLS]> {
    let candidate = Piece::place(piece.kind(), next, piece.col_offset(), piece.row())?;
    for (col, &bits) in candidate.iter().enumerate() {
        if board.column(col) & bits != 0 {
            return None;
        }
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_tetris_types::{ShapeKind, BASE_ROW, SPAWN_COL};

    #[test]
    fn test_probe_clear_on_empty_board() {
        let board = Board::new();
        let piece = Piece::spawn(&board, ShapeKind::T).unwrap();
        assert_eq!(probe_descent(&board, &piece), Descent::Clear);
    }

    #[test]
    fn test_probe_floor() {
        let board = Board::new();
        let mut piece = Piece::spawn(&board, ShapeKind::O).unwrap();
        piece.hard_drop(&board);
        assert_eq!(probe_descent(&board, &piece), Descent::Floor);
        assert!(probe_descent(&board, &piece).is_stop());
    }

    #[test]
    fn test_probe_blocked_reports_stop_row() {
        let mut board = Board::new();
        // Obstacle directly under one O column; bottom piece bit is row 3.
        board.set_cell(SPAWN_COL as usize + 1, BASE_ROW + 2);
        let piece = Piece::spawn(&board, ShapeKind::O).unwrap();

        match probe_descent(&board, &piece) {
            Descent::Blocked { stop_row } => assert_eq!(stop_row, BASE_ROW + 1),
            other => panic!("expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_blocked_takes_minimum_across_columns() {
        let mut board = Board::new();
        // S has an uneven bottom: box column 1 reaches row 3, box column 2
        // only row 2. Obstacles directly under both collide simultaneously
        // with different per-column stop rows.
        board.set_cell(SPAWN_COL as usize + 1, BASE_ROW + 2);
        board.set_cell(SPAWN_COL as usize + 2, BASE_ROW + 1);
        let piece = Piece::spawn(&board, ShapeKind::S).unwrap();

        match probe_descent(&board, &piece) {
            // Column stops are BASE_ROW + 1 and BASE_ROW; the minimum wins.
            Descent::Blocked { stop_row } => assert_eq!(stop_row, BASE_ROW),
            other => panic!("expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_edge_guard() {
        let board = Board::new();
        let mut piece = Piece::spawn(&board, ShapeKind::I).unwrap();
        while piece.shift_right(&board) {}
        assert!(!can_translate(&board, &piece, Side::Right));
        assert!(can_translate(&board, &piece, Side::Left));
    }

    #[test]
    fn test_translate_occupancy_guard() {
        let mut board = Board::new();
        board.set_cell(SPAWN_COL as usize + 3, BASE_ROW);
        let piece = Piece::spawn(&board, ShapeKind::O).unwrap();
        assert!(!can_translate(&board, &piece, Side::Right));
        assert!(can_translate(&board, &piece, Side::Left));
    }

    #[test]
    fn test_rotation_candidate_rejects_overlap() {
        let mut board = Board::new();
        // Box cell (1, 2) is outside T North but inside T East.
        board.set_cell(SPAWN_COL as usize + 1, BASE_ROW + 2);
        let piece = Piece::spawn(&board, ShapeKind::T).unwrap();
        assert!(rotation_candidate(&board, &piece, Rotation::East).is_none());

        // Same piece over a free board: candidate accepted.
        assert!(rotation_candidate(&Board::new(), &piece, Rotation::East).is_some());
    }
}
