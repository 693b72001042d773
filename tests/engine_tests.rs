//! Engine tests - tick flags, command flow and frame publication end to end.

use std::sync::Arc;

use matrix_tetris::engine::{CommandInbox, Engine, FrameSet, NullStatus, TickSet};
use matrix_tetris::types::{Command, COMMAND_INBOX_CAPACITY, MATRIX_COLS};

struct Rig {
    ticks: Arc<TickSet>,
    inbox: Arc<CommandInbox>,
    frames: Arc<FrameSet>,
    engine: Engine,
}

fn rig(seed: u32) -> Rig {
    let ticks = Arc::new(TickSet::new());
    let inbox = Arc::new(CommandInbox::new());
    let frames = Arc::new(FrameSet::new());
    let engine = Engine::new(
        seed,
        Arc::clone(&ticks),
        Arc::clone(&inbox),
        Arc::clone(&frames),
    );
    Rig {
        ticks,
        inbox,
        frames,
        engine,
    }
}

fn snapshot(frames: &FrameSet) -> [u32; MATRIX_COLS] {
    let mut out = [0u32; MATRIX_COLS];
    for (col, slot) in out.iter_mut().enumerate() {
        *slot = frames.scan_column(col);
    }
    out
}

#[test]
fn test_poll_without_ticks_is_inert() {
    let mut r = rig(1);
    let before = snapshot(&r.frames);
    for _ in 0..100 {
        assert!(!r.engine.poll(&mut NullStatus));
    }
    assert_eq!(snapshot(&r.frames), before);
}

#[test]
fn test_gravity_tick_advances_exactly_once() {
    let mut r = rig(1);

    r.ticks.gravity.raise();
    assert!(r.engine.poll(&mut NullStatus));
    let spawned = snapshot(&r.frames);
    assert_ne!(spawned, [0; MATRIX_COLS]);

    // The flag was consumed; another poll does nothing.
    assert!(!r.engine.poll(&mut NullStatus));
    assert_eq!(snapshot(&r.frames), spawned);
}

#[test]
fn test_coalesced_gravity_is_one_step() {
    let mut r = rig(1);
    r.ticks.gravity.raise();
    r.engine.poll(&mut NullStatus);
    let spawned = snapshot(&r.frames);

    // Many raises between polls still yield a single descent.
    r.ticks.gravity.raise();
    r.ticks.gravity.raise();
    r.ticks.gravity.raise();
    r.engine.poll(&mut NullStatus);

    let after = snapshot(&r.frames);
    for col in 0..MATRIX_COLS {
        assert_eq!(after[col], spawned[col] << 1);
    }
}

#[test]
fn test_one_command_per_sample_tick() {
    let mut r = rig(1);
    r.ticks.gravity.raise();
    r.engine.poll(&mut NullStatus);

    r.inbox.push(Command::MoveLeft);
    r.inbox.push(Command::MoveLeft);

    r.ticks.sample.raise();
    r.engine.poll(&mut NullStatus);
    // Exactly one command consumed; the second waits for the next tick.
    assert!(!r.inbox.is_empty());

    r.ticks.sample.raise();
    r.engine.poll(&mut NullStatus);
    assert!(r.inbox.is_empty());
}

#[test]
fn test_overflowing_inbox_drops_new_commands() {
    let r = rig(1);
    let mut accepted = 0;
    for _ in 0..COMMAND_INBOX_CAPACITY * 2 {
        if r.inbox.push(Command::RotateCw) {
            accepted += 1;
        }
    }
    // One slot is sacrificed to distinguish full from empty.
    assert_eq!(accepted, COMMAND_INBOX_CAPACITY - 1);
}

#[test]
fn test_rejected_command_publishes_nothing() {
    let mut r = rig(1);
    r.ticks.gravity.raise();
    r.engine.poll(&mut NullStatus);

    // Walk the piece into the left wall.
    for _ in 0..MATRIX_COLS {
        r.inbox.push(Command::MoveLeft);
        r.ticks.sample.raise();
        r.engine.poll(&mut NullStatus);
    }
    let at_wall = snapshot(&r.frames);

    r.inbox.push(Command::MoveLeft);
    r.ticks.sample.raise();
    assert!(!r.engine.poll(&mut NullStatus));
    assert_eq!(snapshot(&r.frames), at_wall);
}

#[test]
fn test_stop_and_restart_through_the_inbox() {
    let mut r = rig(1);
    r.ticks.gravity.raise();
    r.engine.poll(&mut NullStatus);

    r.inbox.push(Command::Stop);
    r.ticks.sample.raise();
    r.engine.poll(&mut NullStatus);
    assert!(r.engine.session().halted());

    // Gravity no longer moves anything while halted.
    let frozen = snapshot(&r.frames);
    r.ticks.gravity.raise();
    assert!(!r.engine.poll(&mut NullStatus));
    assert_eq!(snapshot(&r.frames), frozen);

    r.inbox.push(Command::Restart);
    r.ticks.sample.raise();
    r.engine.poll(&mut NullStatus);
    assert!(!r.engine.session().halted());
    assert_eq!(snapshot(&r.frames), [0; MATRIX_COLS]);
}
