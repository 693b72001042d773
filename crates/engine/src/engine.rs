//! The cooperative main loop body.
//!
//! One `poll` call is one iteration of the firmware's foreground loop: drain
//! at most one pending command if the sample flag is set, advance the game by
//! exactly one step if the gravity flag is set, and publish a fresh frame
//! after every completed state change so the refresh path always has a
//! finished buffer to scan.

use std::sync::Arc;

use matrix_tetris_core::{Session, StepEvent};
use matrix_tetris_types::MATRIX_COLS;

use crate::frame::FrameSet;
use crate::inbox::CommandInbox;
use crate::ports::StatusPort;
use crate::ticks::TickSet;

pub struct Engine {
    session: Session,
    ticks: Arc<TickSet>,
    inbox: Arc<CommandInbox>,
    frames: Arc<FrameSet>,
}

impl Engine {
    pub fn new(
        seed: u32,
        ticks: Arc<TickSet>,
        inbox: Arc<CommandInbox>,
        frames: Arc<FrameSet>,
    ) -> Self {
        let engine = Self {
            session: Session::new(seed),
            ticks,
            inbox,
            frames,
        };
        // Seed the front buffer so the first refresh scans a valid frame.
        engine.publish();
        engine
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one main-loop iteration. Returns whether game state advanced.
    pub fn poll<S: StatusPort>(&mut self, status: &mut S) -> bool {
        self.session.stir_entropy();
        let mut dirty = false;

        if self.ticks.sample.take() {
            if let Some(command) = self.inbox.pop() {
                dirty |= self.session.apply(command);
            }
        }

        if self.ticks.gravity.take() {
            match self.session.step_gravity() {
                StepEvent::Idle => {}
                StepEvent::Spawned | StepEvent::Descended => dirty = true,
                StepEvent::Locked { cleared, leveled } => {
                    dirty = true;
                    if cleared > 0 {
                        status.lines_cleared(self.session.lines());
                    }
                    if leveled {
                        status.level_up(self.session.level());
                    }
                    if self.session.game_over() {
                        status.game_over();
                    }
                }
                StepEvent::GameOver => {
                    dirty = true;
                    status.game_over();
                }
            }
        }

        // The flip happens exactly once per completed step, never
        // mid-composition.
        if dirty {
            self.publish();
        }
        dirty
    }

    fn publish(&self) {
        let mut cols = [0u32; MATRIX_COLS];
        self.session.compose(&mut cols);
        self.frames.publish(&cols);
    }
}
