//! Shape table - column bitmasks for every (kind, rotation) pair.
//!
//! Each shape lives in a 4x4 box and is stored as four column masks, bit 0 at
//! the top of the box. The table is `const` and immutable for the process
//! lifetime; placement on the board only ever shifts these masks.

use matrix_tetris_types::{Rotation, ShapeKind, SHAPE_SPAN};

/// Column masks of one shape variant inside its 4x4 box.
pub type ShapeColumns = [u32; SHAPE_SPAN];

/// Look up the column masks for a shape kind and rotation.
pub const fn shape_columns(kind: ShapeKind, rotation: Rotation) -> ShapeColumns {
    match kind {
        ShapeKind::I => match rotation {
            Rotation::North => [0b0010, 0b0010, 0b0010, 0b0010],
            Rotation::East => [0b0000, 0b0000, 0b1111, 0b0000],
            Rotation::South => [0b0100, 0b0100, 0b0100, 0b0100],
            Rotation::West => [0b0000, 0b1111, 0b0000, 0b0000],
        },
        // O occupies the same cells in every variant.
        ShapeKind::O => [0b0000, 0b0011, 0b0011, 0b0000],
        ShapeKind::T => match rotation {
            Rotation::North => [0b0010, 0b0011, 0b0010, 0b0000],
            Rotation::East => [0b0000, 0b0111, 0b0010, 0b0000],
            Rotation::South => [0b0010, 0b0110, 0b0010, 0b0000],
            Rotation::West => [0b0010, 0b0111, 0b0000, 0b0000],
        },
        ShapeKind::S => match rotation {
            Rotation::North => [0b0010, 0b0011, 0b0001, 0b0000],
            Rotation::East => [0b0000, 0b0011, 0b0110, 0b0000],
            Rotation::South => [0b0100, 0b0110, 0b0010, 0b0000],
            Rotation::West => [0b0011, 0b0110, 0b0000, 0b0000],
        },
        ShapeKind::Z => match rotation {
            Rotation::North => [0b0001, 0b0011, 0b0010, 0b0000],
            Rotation::East => [0b0000, 0b0110, 0b0011, 0b0000],
            Rotation::South => [0b0010, 0b0110, 0b0100, 0b0000],
            Rotation::West => [0b0110, 0b0011, 0b0000, 0b0000],
        },
        ShapeKind::J => match rotation {
            Rotation::North => [0b0011, 0b0010, 0b0010, 0b0000],
            Rotation::East => [0b0000, 0b0111, 0b0001, 0b0000],
            Rotation::South => [0b0010, 0b0010, 0b0110, 0b0000],
            Rotation::West => [0b0100, 0b0111, 0b0000, 0b0000],
        },
        ShapeKind::L => match rotation {
            Rotation::North => [0b0010, 0b0010, 0b0011, 0b0000],
            Rotation::East => [0b0000, 0b0111, 0b0100, 0b0000],
            Rotation::South => [0b0110, 0b0010, 0b0010, 0b0000],
            Rotation::West => [0b0001, 0b0111, 0b0000, 0b0000],
        },
    }
}
