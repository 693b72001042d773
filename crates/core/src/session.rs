//! Session state machine.
//!
//! One `Session` owns everything a running game mutates: the board, the
//! active piece, the shape picker, and the score/level counters. It replaces
//! the firmware's process-wide globals with an explicit context the scheduler
//! passes around, and it is the sole writer of game state.

use matrix_tetris_types::{
    Command, MATRIX_COLS, GRAVITY_FLOOR_MS, GRAVITY_START_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL,
    SCORE_PER_LINE,
};

use crate::board::Board;
use crate::collision::probe_descent;
use crate::picker::ShapePicker;
use crate::piece::Piece;

/// Lifecycle phase of the session.
///
/// Locking and clearing are not observable states: a gravity step that stops
/// the piece merges, clears, and transitions in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next gravity tick attempts to spawn a piece.
    Spawning,
    /// A piece is airborne.
    Falling,
    /// Terminal until an external restart.
    GameOver,
}

/// What a gravity step did, for the diagnostic port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Halted, game over, or nothing to do.
    Idle,
    Spawned,
    Descended,
    /// The piece merged into the board; `cleared` full rows were compacted.
    Locked { cleared: u32, leveled: bool },
    /// Spawn failed or the stack reached the spawn region.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<Piece>,
    picker: ShapePicker,
    phase: Phase,
    halted: bool,
    score: u32,
    level: u32,
    lines: u32,
    gravity_ms: u64,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: ShapePicker::new(seed),
            phase: Phase::Spawning,
            halted: false,
            score: 0,
            level: 1,
            lines: 0,
            gravity_ms: GRAVITY_START_MS,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity tick period; shrinks as the level rises.
    pub fn gravity_ms(&self) -> u64 {
        self.gravity_ms
    }

    /// Feed entropy into the shape picker; called every main-loop iteration.
    pub fn stir_entropy(&mut self) {
        self.picker.bump_fast();
    }

    /// Reset every session parameter and re-enter `Spawning`.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.phase = Phase::Spawning;
        self.halted = false;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.gravity_ms = GRAVITY_START_MS;
    }

    /// Advance the game by exactly one gravity step.
    pub fn step_gravity(&mut self) -> StepEvent {
        if self.halted || self.phase == Phase::GameOver {
            return StepEvent::Idle;
        }
        self.picker.bump_slow();

        match self.phase {
            Phase::Spawning => {
                let kind = self.picker.pick();
                match Piece::spawn(&self.board, kind) {
                    Some(piece) => {
                        self.active = Some(piece);
                        self.phase = Phase::Falling;
                        StepEvent::Spawned
                    }
                    None => {
                        self.phase = Phase::GameOver;
                        StepEvent::GameOver
                    }
                }
            }
            Phase::Falling => {
                let Some(piece) = self.active.as_mut() else {
                    // Cannot happen; recover by respawning next tick.
                    self.phase = Phase::Spawning;
                    return StepEvent::Idle;
                };
                if probe_descent(&self.board, piece).is_stop() {
                    self.lock()
                } else {
                    piece.descend();
                    StepEvent::Descended
                }
            }
            Phase::GameOver => StepEvent::Idle,
        }
    }

    /// Merge the active piece, clear full rows, and pick the next phase.
    fn lock(&mut self) -> StepEvent {
        let Some(piece) = self.active.take() else {
            return StepEvent::Idle;
        };
        self.board.merge(&piece);

        let cleared = self.board.clear_full_rows().len() as u32;
        let mut leveled = false;
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * SCORE_PER_LINE;
            if self.lines >= self.level * LINES_PER_LEVEL {
                self.level += 1;
                self.gravity_ms = self
                    .gravity_ms
                    .saturating_sub(GRAVITY_STEP_MS)
                    .max(GRAVITY_FLOOR_MS);
                leveled = true;
            }
        }

        if self.board.intrudes_spawn_guard() {
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::Spawning;
        }
        StepEvent::Locked { cleared, leveled }
    }

    /// Apply one user command. Returns whether any state changed.
    ///
    /// Structural rejections (blocked moves, impossible rotations) report
    /// `false` and leave the session untouched.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Restart => {
                self.restart();
                true
            }
            Command::Stop => {
                let changed = !self.halted;
                self.halted = true;
                changed
            }
            _ if self.halted || self.phase != Phase::Falling => false,
            Command::MoveLeft | Command::MoveRight | Command::RotateCw | Command::RotateCcw => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                match command {
                    Command::MoveLeft => piece.shift_left(&self.board),
                    Command::MoveRight => piece.shift_right(&self.board),
                    Command::RotateCw => piece.rotate_cw(&self.board),
                    Command::RotateCcw => piece.rotate_ccw(&self.board),
                    _ => unreachable!(),
                }
            }
            Command::HardDrop => {
                let Some(piece) = self.active.as_mut() else {
                    return false;
                };
                let distance = piece.hard_drop(&self.board);
                self.score += distance;
                distance > 0
            }
        }
    }

    /// Compose board and airborne piece into a frame; once locked, the board
    /// alone is authoritative.
    pub fn compose(&self, out: &mut [u32; MATRIX_COLS]) {
        *out = *self.board.cols();
        if let Some(piece) = &self.active {
            for (col, bits) in out.iter_mut().zip(piece.cols()) {
                *col |= bits;
            }
        }
    }
}
