//! Interactive terminal driver
//!
//! Owns the tick cadence and command interpretation; the simulation core
//! never sees any of this. A dedicated thread polls the keyboard and feeds
//! key events over a channel to the single simulation loop, which gates
//! `tick()` on the pause flag, renders after every change, and translates
//! the call-entry line into one `admit_request`.

mod input;
mod render;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::event::KeyCode;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::simulation::SimWorld;

/// Wall-clock length of one simulated time unit.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// What the driver is currently reading from the keyboard.
enum InputMode {
    /// Single-key menu commands.
    Command,
    /// Collecting an `origin dest passengers` line for a call.
    Call { buffer: String },
}

struct UiState {
    paused: bool,
    mode: InputMode,
    notice: Option<String>,
}

enum Action {
    Continue,
    Quit,
}

/// Run the interactive simulation until the user quits.
pub fn run() -> Result<()> {
    let mut world = SimWorld::new();

    enable_raw_mode()?;
    let shutdown = Arc::new(AtomicBool::new(false));
    let keys = input::spawn_key_poller(shutdown.clone());

    let result = drive(&mut world, &keys);

    shutdown.store(true, Ordering::SeqCst);
    let _ = disable_raw_mode();
    let _ = render::restore_terminal();
    result
}

fn drive(world: &mut SimWorld, keys: &Receiver<KeyCode>) -> Result<()> {
    let mut state = UiState {
        paused: false,
        mode: InputMode::Command,
        notice: None,
    };

    render::draw(&world.snapshot(), &state)?;
    let mut next_tick = Instant::now() + TICK_INTERVAL;

    loop {
        let mut dirty = false;
        while let Ok(key) = keys.try_recv() {
            match handle_key(world, &mut state, key) {
                Action::Quit => return Ok(()),
                Action::Continue => dirty = true,
            }
        }

        if Instant::now() >= next_tick {
            next_tick += TICK_INTERVAL;
            if !state.paused {
                world.tick()?;
                dirty = true;
            }
        }

        if dirty {
            render::draw(&world.snapshot(), &state)?;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

fn handle_key(world: &mut SimWorld, state: &mut UiState, key: KeyCode) -> Action {
    match &mut state.mode {
        InputMode::Command => match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
            KeyCode::Char('w') | KeyCode::Char('W') => state.paused = true,
            KeyCode::Char('e') | KeyCode::Char('E') => state.paused = false,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                world.reset();
                state.paused = false;
                state.notice = Some("simulation restarted".into());
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                state.mode = InputMode::Call {
                    buffer: String::new(),
                };
                state.notice = None;
            }
            _ => {}
        },
        InputMode::Call { buffer } => match key {
            KeyCode::Esc => {
                state.mode = InputMode::Command;
                state.notice = Some("call entry cancelled".into());
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                state.notice = Some(submit_call(world, buffer));
                state.mode = InputMode::Command;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' => {
                buffer.push(c);
            }
            _ => {}
        },
    }
    Action::Continue
}

/// Parse an `origin dest passengers` line and admit it, reporting the
/// outcome as a status line.
fn submit_call(world: &mut SimWorld, line: &str) -> String {
    let fields: Vec<i32> = line
        .split_whitespace()
        .filter_map(|field| field.parse().ok())
        .collect();
    let [origin, dest, passengers] = fields[..] else {
        return format!("could not parse call '{}': expected 'origin dest passengers'", line.trim());
    };
    if world.admit_request(origin, dest, passengers) {
        format!("call admitted: {origin} -> {dest}, {passengers} passengers")
    } else {
        format!("call rejected: {origin} -> {dest}, {passengers} passengers")
    }
}
