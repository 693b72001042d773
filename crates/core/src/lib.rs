//! Core game logic - pure, deterministic, and testable.
//!
//! This crate holds every game rule of the LED-matrix tile game and nothing
//! else: it has **zero dependencies** on timers, terminals, or I/O, so the
//! same code drives the terminal host, the integration tests, and the benches.
//!
//! # Module Structure
//!
//! - [`board`]: bit-packed 16-column playfield with line clear and compaction
//! - [`shapes`]: the static (kind x rotation) -> column-mask table
//! - [`piece`]: the falling piece and its transformations (move/rotate/drop)
//! - [`collision`]: pure occupancy queries the transformations are built on
//! - [`picker`]: counter-derived pseudo-random shape selection
//! - [`session`]: spawn -> fall -> lock -> clear -> (respawn | game over)
//!
//! # Representation
//!
//! The playfield is column-major: one `u32` per matrix column, bit 0 at the
//! top row and bit 31 at the floor. A one-row descent is a left shift, a full
//! row is a set bit in the AND of all sixteen columns, and merging a locked
//! piece is a bitwise OR. All hot paths are allocation-free.

pub mod board;
pub mod collision;
pub mod picker;
pub mod piece;
pub mod session;
pub mod shapes;

pub use matrix_tetris_types as types;

pub use board::Board;
pub use collision::{can_translate, probe_descent, rotation_candidate, Descent, Side};
pub use picker::ShapePicker;
pub use piece::Piece;
pub use session::{Phase, Session, StepEvent};
pub use shapes::shape_columns;
