//! Collaborator ports.
//!
//! The physical display scanner and the diagnostic console live outside this
//! core; these traits pin down the interfaces the firmware used.

/// Column-driven display driver.
///
/// The core hands over one `(one-hot column selector, 32-bit row mask)` pair
/// per matrix column per refresh, in increasing column order; the driver owns
/// shift-out and latch timing.
pub trait DisplayPort {
    fn write_column(&mut self, select: u16, rows: u32);
}

/// Optional textual status emission. Purely observational; nothing is ever
/// read back by the core.
pub trait StatusPort {
    fn level_up(&mut self, _level: u32) {}
    fn lines_cleared(&mut self, _total: u32) {}
    fn game_over(&mut self) {}
}

/// Discards all status output.
pub struct NullStatus;

impl StatusPort for NullStatus {}
