//! Terminal runner (default binary).
//!
//! On the target board the three tick sources are hardware timer interrupts;
//! here a dedicated thread plays the interrupt context, raising the same
//! coalescing flags the foreground loop consumes. Keys stand in for the
//! serial console and a terminal-emulated panel stands in for the LED matrix.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use matrix_tetris::engine::{CommandInbox, Engine, FrameSet, PeriodicTimer, StatusPort, TickSet};
use matrix_tetris::input::{map_key, should_quit};
use matrix_tetris::term::{Hud, MatrixPanel, Surface, TerminalRenderer, Viewport};
use matrix_tetris::types::{GRAVITY_START_MS, REFRESH_INTERVAL_MS, SAMPLE_INTERVAL_MS};

/// Nothing extra to signal on the host; the HUD already shows everything.
struct SilentStatus;

impl StatusPort for SilentStatus {}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let ticks = Arc::new(TickSet::new());
    let inbox = Arc::new(CommandInbox::new());
    let frames = Arc::new(FrameSet::new());

    // Gravity speeds up as levels climb; the tick thread reads the current
    // period from here each pass.
    let gravity_period = Arc::new(AtomicU64::new(GRAVITY_START_MS));
    let running = Arc::new(AtomicBool::new(true));

    let tick_thread = spawn_tick_thread(
        Arc::clone(&ticks),
        Arc::clone(&gravity_period),
        Arc::clone(&running),
    );

    let seed = entropy_seed();
    let mut engine = Engine::new(seed, Arc::clone(&ticks), Arc::clone(&inbox), Arc::clone(&frames));

    let mut panel = MatrixPanel::new();
    let mut surface = Surface::new(0, 0);
    let mut status = SilentStatus;

    loop {
        // Input with a short timeout so tick flags are serviced promptly.
        if event::poll(Duration::from_millis(1))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(command) = map_key(key) {
                        inbox.push(command);
                    }
                }
            }
        }

        engine.poll(&mut status);
        gravity_period.store(engine.session().gravity_ms(), Ordering::Relaxed);

        if ticks.refresh.take() {
            frames.refresh(&mut panel);

            let session = engine.session();
            let hud = Hud {
                score: session.score(),
                level: session.level(),
                lines: session.lines(),
                halted: session.halted(),
                game_over: session.game_over(),
            };

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 40));
            panel.render_into(&hud, Viewport::new(w, h), &mut surface);
            term.draw(&surface)?;
        }
    }

    running.store(false, Ordering::Relaxed);
    let _ = tick_thread.join();
    Ok(())
}

/// Stand-in for the timer interrupts: raises the three tick flags at their
/// respective periods until `running` drops.
fn spawn_tick_thread(
    ticks: Arc<TickSet>,
    gravity_period: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut refresh = PeriodicTimer::new(REFRESH_INTERVAL_MS);
        let mut sample = PeriodicTimer::new(SAMPLE_INTERVAL_MS);
        let mut gravity = PeriodicTimer::new(gravity_period.load(Ordering::Relaxed));

        while running.load(Ordering::Relaxed) {
            let period = gravity_period.load(Ordering::Relaxed);
            if gravity.period_ms() != period {
                gravity.set_period_ms(period);
            }

            if refresh.poll() {
                ticks.refresh.raise();
            }
            if sample.poll() {
                ticks.sample.raise();
            }
            if gravity.poll() {
                ticks.gravity.raise();
            }

            thread::sleep(Duration::from_millis(1));
        }
    })
}

/// Seed the shape picker from wall-clock jitter, the closest host analog to
/// reading free-running hardware counters at an arbitrary moment.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0x5EED)
        | 1
}
