//! Double-buffered frame set.
//!
//! Two full-board column buffers plus an atomic selector. The game loop
//! composes into the back buffer and flips exactly once per completed step;
//! the refresh path only ever reads the front buffer. The flip is a single
//! Release store observed with Acquire loads, so the reader sees either the
//! prior complete frame or the new complete frame, never a mix.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use matrix_tetris_types::MATRIX_COLS;

use crate::ports::DisplayPort;

pub struct FrameSet {
    planes: [[AtomicU32; MATRIX_COLS]; 2],
    front: AtomicUsize,
}

impl FrameSet {
    pub fn new() -> Self {
        Self {
            planes: [
                std::array::from_fn(|_| AtomicU32::new(0)),
                std::array::from_fn(|_| AtomicU32::new(0)),
            ],
            front: AtomicUsize::new(0),
        }
    }

    /// Write a complete frame into the back buffer, then flip.
    ///
    /// Single-writer: only the game loop calls this.
    pub fn publish(&self, cols: &[u32; MATRIX_COLS]) {
        let back = self.front.load(Ordering::Relaxed) ^ 1;
        for (slot, &bits) in self.planes[back].iter().zip(cols) {
            slot.store(bits, Ordering::Relaxed);
        }
        self.front.store(back, Ordering::Release);
    }

    /// Read one column of the front buffer.
    pub fn scan_column(&self, col: usize) -> u32 {
        let front = self.front.load(Ordering::Acquire);
        self.planes[front][col].load(Ordering::Relaxed)
    }

    /// Stream the front buffer to the display driver, one column at a time in
    /// increasing column order, with the one-hot column selector.
    pub fn refresh<D: DisplayPort>(&self, sink: &mut D) {
        let front = self.front.load(Ordering::Acquire);
        for col in 0..MATRIX_COLS {
            let rows = self.planes[front][col].load(Ordering::Relaxed);
            sink.write_column(1 << col, rows);
        }
    }
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::new()
    }
}
