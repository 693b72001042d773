//! Input - terminal events to game commands.

pub mod map;

pub use map::{map_key, should_quit};
