//! Core types shared across the workspace.
//!
//! This crate contains pure constants and closed enums with no external
//! dependencies. Everything here mirrors the fixed geometry of the target
//! hardware: a 16-column, 32-row column-driven LED matrix.

/// Number of physical columns on the matrix (one `u32` bitmask each).
pub const MATRIX_COLS: usize = 16;

/// Number of rows per column; equals the bit width of a column mask.
pub const MATRIX_ROWS: u32 = 32;

/// Row the spawn template is shifted down to when a piece enters the board.
/// Rows above this are the game-over guard band.
pub const BASE_ROW: u32 = 2;

/// Leftmost column of the 4x4 shape box at spawn.
pub const SPAWN_COL: i8 = 6;

/// Width of the shape box in columns.
pub const SHAPE_SPAN: usize = 4;

/// Timing for the host runner (hardware rates in the firmware were 2 kHz
/// refresh / 1 kHz input sampling; a terminal cannot usefully exceed these).
pub const REFRESH_INTERVAL_MS: u64 = 16;
pub const SAMPLE_INTERVAL_MS: u64 = 8;

/// Gravity starts at one descent per second and accelerates with level.
pub const GRAVITY_START_MS: u64 = 1000;
pub const GRAVITY_STEP_MS: u64 = 100;
pub const GRAVITY_FLOOR_MS: u64 = 100;

/// Lines to clear before each level-up.
pub const LINES_PER_LEVEL: u32 = 5;

/// Score increments.
pub const SCORE_PER_LINE: u32 = 100;

/// Capacity of the command inbox between the console reader and the engine.
/// Must be a power of two.
pub const COMMAND_INBOX_CAPACITY: usize = 16;

/// Tetromino shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    pub const COUNT: u8 = 7;

    /// All kinds in index order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Map an arbitrary counter sample onto a shape kind.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    pub fn index(self) -> u8 {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Rotation variants (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Closed set of commands accepted by the engine.
///
/// The firmware dispatched on raw console bytes; the engine only ever sees
/// this enum, and unknown bytes are dropped at the decode boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    HardDrop,
    Restart,
    Stop,
}

impl Command {
    /// Decode a single-character console code.
    ///
    /// These are the original serial bindings: 'a'/'f' steer, 'r' rotates,
    /// space drops, 'n' restarts, 'd' halts the game timers.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'a' => Some(Command::MoveLeft),
            b'f' => Some(Command::MoveRight),
            b'r' => Some(Command::RotateCw),
            b'c' => Some(Command::RotateCcw),
            b' ' => Some(Command::HardDrop),
            b'n' => Some(Command::Restart),
            b'd' => Some(Command::Stop),
            _ => None,
        }
    }

    /// The wire code for this command.
    pub fn code(self) -> u8 {
        match self {
            Command::MoveLeft => b'a',
            Command::MoveRight => b'f',
            Command::RotateCw => b'r',
            Command::RotateCcw => b'c',
            Command::HardDrop => b' ',
            Command::Restart => b'n',
            Command::Stop => b'd',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.cw();
        }
        assert_eq!(r, Rotation::North);

        assert_eq!(Rotation::North.cw().ccw(), Rotation::North);
        assert_eq!(Rotation::East.ccw(), Rotation::North);
    }

    #[test]
    fn test_shape_index_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_index(kind.index()), kind);
        }
        // Out-of-range samples wrap.
        assert_eq!(ShapeKind::from_index(7), ShapeKind::I);
        assert_eq!(ShapeKind::from_index(255), ShapeKind::from_index(255 % 7));
    }

    #[test]
    fn test_command_codes_roundtrip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::RotateCw,
            Command::RotateCcw,
            Command::HardDrop,
            Command::Restart,
            Command::Stop,
        ] {
            assert_eq!(Command::from_code(cmd.code()), Some(cmd));
        }
        assert_eq!(Command::from_code(b'x'), None);
        assert_eq!(Command::from_code(0x00), None);
    }
}
