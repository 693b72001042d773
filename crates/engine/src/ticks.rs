//! Coalescing tick flags.
//!
//! A flag raised while already raised is a no-op: ticks coalesce instead of
//! queueing, so a slow consumer drops intermediate ticks rather than falling
//! permanently behind. Raise is a Release store, take is an Acquire swap.

use std::sync::atomic::{AtomicBool, Ordering};

/// A single-bit event flag shared between one producer and one consumer.
#[derive(Debug, Default)]
pub struct TickFlag(AtomicBool);

impl TickFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Post the event. Raising an already-raised flag coalesces.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume the event if pending.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// The three periodic sources driving the game.
#[derive(Debug, Default)]
pub struct TickSet {
    /// Highest frequency; drives the rendering pipeline.
    pub refresh: TickFlag,
    /// Enables consumption of the next pending command.
    pub sample: TickFlag,
    /// Slowest; enables one step of automatic descent.
    pub gravity: TickFlag,
}

impl TickSet {
    pub const fn new() -> Self {
        Self {
            refresh: TickFlag::new(),
            sample: TickFlag::new(),
            gravity: TickFlag::new(),
        }
    }
}
