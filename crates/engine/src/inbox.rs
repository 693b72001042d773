//! Bounded single-producer/single-consumer command inbox.
//!
//! The console reader pushes single-byte command codes; the engine pops at
//! most one per sample tick. The ring stores raw codes in atomic slots with a
//! power-of-two capacity so index wrap is a mask. When the ring is full the
//! push is dropped and reported to the producer - the consumer never blocks.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use matrix_tetris_types::{Command, COMMAND_INBOX_CAPACITY};

const MASK: usize = COMMAND_INBOX_CAPACITY - 1;

const _: () = assert!(COMMAND_INBOX_CAPACITY.is_power_of_two());

pub struct CommandInbox {
    slots: [AtomicU8; COMMAND_INBOX_CAPACITY],
    head: AtomicUsize,
    tail: AtomicUsize,
}

impl CommandInbox {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| AtomicU8::new(0)),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    /// Producer side. Returns `false` when the ring is full (command dropped).
    pub fn push(&self, command: Command) -> bool {
        let tail = self.tail.load(Ordering::Relaxed);
        let next = (tail + 1) & MASK;
        if next == self.head.load(Ordering::Acquire) {
            return false;
        }
        self.slots[tail].store(command.code(), Ordering::Relaxed);
        self.tail.store(next, Ordering::Release);
        true
    }

    /// Consumer side. Non-blocking.
    pub fn pop(&self) -> Option<Command> {
        let head = self.head.load(Ordering::Relaxed);
        if head == self.tail.load(Ordering::Acquire) {
            return None;
        }
        let code = self.slots[head].load(Ordering::Relaxed);
        self.head.store((head + 1) & MASK, Ordering::Release);
        // Only codes produced by `Command::code` are ever stored.
        Command::from_code(code)
    }

    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }
}

impl Default for CommandInbox {
    fn default() -> Self {
        Self::new()
    }
}
