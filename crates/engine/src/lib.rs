//! Engine - the cooperative scheduling layer around the core.
//!
//! The firmware ran the game inside timer interrupts that shared flags with a
//! foreground loop. Here the producer side (a timer thread, or a test) only
//! raises coalescing flags and pushes command bytes; all game-logic mutation
//! happens in [`Engine::poll`] on the consumer thread. Sharing is strictly
//! single-writer/single-reader per buffer, so no locks are involved anywhere.

pub mod engine;
pub mod frame;
pub mod inbox;
pub mod ports;
pub mod ticks;
pub mod timer;

pub use engine::Engine;
pub use frame::FrameSet;
pub use inbox::CommandInbox;
pub use ports::{DisplayPort, NullStatus, StatusPort};
pub use ticks::{TickFlag, TickSet};
pub use timer::PeriodicTimer;
