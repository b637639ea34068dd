//! Conway's Game of Life on a bounded grid.
//!
//! The engine (`grid`, `rules`) is pure; `SimulationController` owns the
//! grid, the repeating timer and a `RenderSink`, and the `console` turns text
//! lines into controller operations.

pub mod command;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod grid;
pub mod render;
pub mod rules;
pub mod timer;

pub use command::{dispatch, Command};
pub use config::LifeConfig;
pub use console::{Console, History, LogEntry};
pub use controller::{SimulationController, Transition};
pub use error::{CommandError, ConfigError, GridError};
pub use grid::{Cell, Grid};
pub use render::{RecordingSink, RenderSink};
pub use rules::{count_alive, neighbors, step};
pub use timer::Ticker;
