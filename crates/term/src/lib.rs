//! Terminal front end for the LED-matrix game.
//!
//! The firmware drives a 16x32 LED panel through a column-select latch; on a
//! host this crate emulates that panel in a terminal. `MatrixPanel` implements
//! the engine's `DisplayPort` so the refresh path is identical to hardware,
//! and `TerminalRenderer` flushes the emulated panel to the screen.

pub mod panel;
pub mod renderer;
pub mod surface;

pub use matrix_tetris_engine as engine;
pub use matrix_tetris_types as types;

pub use panel::{Hud, MatrixPanel, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use surface::{Cell, Rgb, Surface, Tone};
