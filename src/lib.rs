//! Elevator Simulation Library
//!
//! A multi-car elevator dispatch simulation that can run headless or with
//! an interactive terminal UI.

pub mod simulation;

#[cfg(feature = "tui")]
pub mod tui;
