//! Terminal grid renderer
//!
//! Draws the building as one row per floor and one column per car, with a
//! travel-direction arrow, next target, and on-board count in each occupied
//! cell, followed by per-elevator status lines and the command menu.

use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::simulation::{Direction, ElevatorSnapshot, FleetSnapshot, NUM_FLOORS};

use super::{InputMode, UiState};

const CELL_WIDTH: usize = 11;

/// Redraw the whole screen from a fleet snapshot.
pub(super) fn draw(snapshot: &FleetSnapshot, state: &UiState) -> Result<()> {
    let mut out = stdout();
    queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;

    let line = |out: &mut std::io::Stdout, text: String| -> Result<()> {
        queue!(out, Print(text), Print("\r\n"))?;
        Ok(())
    };

    let rule = format!("    {}", "-".repeat((CELL_WIDTH + 1) * snapshot.elevators.len() + 1));

    for floor in (1..=NUM_FLOORS).rev() {
        line(&mut out, rule.clone())?;
        let mut row = format!("{:>2}F ", floor);
        for elevator in &snapshot.elevators {
            row.push('|');
            if elevator.floor == floor {
                row.push_str(&format!("{:^width$}", cell_text(elevator), width = CELL_WIDTH));
            } else {
                row.push_str(&" ".repeat(CELL_WIDTH));
            }
        }
        row.push('|');
        line(&mut out, row)?;
    }
    line(&mut out, rule)?;
    line(
        &mut out,
        format!(
            "    {}",
            ["low 1", "low 2", "all 1", "all 2", "high 1", "high 2"]
                .map(|label| format!(" {:^width$}", label, width = CELL_WIDTH))
                .join("")
        ),
    )?;
    line(&mut out, String::new())?;

    for elevator in &snapshot.elevators {
        line(&mut out, status_line(elevator))?;
    }
    line(&mut out, String::new())?;
    line(
        &mut out,
        format!("tick {} | queued calls: {}", snapshot.tick, snapshot.queued_calls),
    )?;

    line(
        &mut out,
        "[A] call   [W] pause   [E] resume   [R] restart   [Q] quit".to_string(),
    )?;
    if state.paused {
        line(&mut out, "-- paused --".to_string())?;
    }
    if let Some(notice) = &state.notice {
        line(&mut out, notice.clone())?;
    }
    match &state.mode {
        InputMode::Command => {}
        InputMode::Call { buffer } => {
            line(
                &mut out,
                "call entry: type 'origin dest passengers', Enter to submit, Esc to cancel".to_string(),
            )?;
            queue!(out, Print(format!("call> {}", buffer)))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Show the cursor again on shutdown.
pub(super) fn restore_terminal() -> Result<()> {
    let mut out = stdout();
    queue!(out, Show, Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

fn cell_text(elevator: &ElevatorSnapshot) -> String {
    if elevator.under_maintenance {
        return "MAINT".to_string();
    }
    match elevator.direction {
        Direction::Up => format!("^ {:>2}F {:>2}p", elevator.next_target, elevator.load),
        Direction::Down => format!("v {:>2}F {:>2}p", elevator.next_target, elevator.load),
        Direction::Idle => format!("  {:>2}p", elevator.load),
    }
}

fn status_line(elevator: &ElevatorSnapshot) -> String {
    let state = if elevator.under_maintenance {
        format!("maintenance, {:>2} ticks left", elevator.maintenance_ticks_left)
    } else if elevator.stops.is_empty() {
        "idle".to_string()
    } else {
        "moving".to_string()
    };
    let stops: Vec<String> = elevator
        .stops
        .iter()
        .map(|stop| {
            if stop.is_maintenance() {
                "(maint)".to_string()
            } else {
                format!("({}F {:+})", stop.floor, stop.delta)
            }
        })
        .collect();
    format!(
        "elevator {} | {:<26} | load {:>2} | lifetime {:>3} | stops: {}",
        elevator.id,
        state,
        elevator.load,
        elevator.lifetime_riders,
        stops.join(" ")
    )
}
