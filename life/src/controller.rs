// controller.rs - Owns the grid and the run/stop state machine

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::render::RenderSink;
use crate::rules;
use crate::timer::Ticker;

/// Result of a run or stop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    AlreadyRunning,
    Stopped,
    AlreadyStopped,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transition::Started => "started",
            Transition::AlreadyRunning => "already running",
            Transition::Stopped => "stopped",
            Transition::AlreadyStopped => "already stopped",
        })
    }
}

/// The single stateful piece of the simulation.
///
/// Holds the grid, the repeating timer and the render sink. The simulation
/// is running exactly when a timer is held, so the running flag and the
/// timer handle cannot disagree. Every mutation redraws the sink once,
/// synchronously, before the call returns.
pub struct SimulationController<R: RenderSink> {
    grid: Grid,
    timer: Option<Ticker>,
    interval: Duration,
    generation: u64,
    sink: R,
}

impl<R: RenderSink> SimulationController<R> {
    /// Starts stopped with an all-dead grid of the configured size.
    pub fn new(config: &SimulationConfig, sink: R) -> Self {
        let grid = Grid::new(config.width, config.height, Cell::Dead);
        Self::with_grid(grid, config.tick_interval(), sink)
    }

    pub fn with_grid(grid: Grid, interval: Duration, sink: R) -> Self {
        let mut controller = Self { grid, timer: None, interval, generation: 0, sink };
        controller.render();
        controller
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Steps applied since the last create or clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// Stops any run and replaces the grid with a fresh all-dead one.
    pub fn create(&mut self, width: usize, height: usize) {
        self.halt();
        self.grid = Grid::new(width, height, Cell::Dead);
        self.generation = 0;
        info!(width, height, "Created grid");
        self.render();
    }

    /// Stops any run and kills every cell in place.
    pub fn clear(&mut self) {
        self.halt();
        self.grid.clear(Cell::Dead);
        self.generation = 0;
        debug!("Cleared grid");
        self.render();
    }

    pub fn run(&mut self) -> Transition {
        if self.is_running() {
            return Transition::AlreadyRunning;
        }
        self.timer = Some(Ticker::start(self.interval, Instant::now()));
        info!(interval_ms = self.interval.as_millis() as u64, "Simulation started");
        Transition::Started
    }

    pub fn stop(&mut self) -> Transition {
        if !self.halt() {
            return Transition::AlreadyStopped;
        }
        info!(generation = self.generation, "Simulation stopped");
        Transition::Stopped
    }

    /// Flips one cell. Allowed while running; the next tick works from the
    /// edited grid.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let cell = self.grid.toggle(x, y)?;
        debug!(x, y, ?cell, "Toggled cell");
        self.render();
        Ok(cell)
    }

    /// Advances one generation regardless of the running state.
    pub fn manual_step(&mut self) {
        self.advance();
    }

    /// One firing of the repeating timer. Ignored while stopped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.advance();
        true
    }

    /// Called by the host whenever it wakes up. Runs a tick if the timer is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.timer.as_mut().is_some_and(|timer| timer.fire(now));
        if due {
            self.tick();
        }
        due
    }

    /// When the host should next call `poll`, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(Ticker::next_due)
    }

    /// Re-rolls every cell with `Grid::randomize`.
    pub fn randomize<G: Rng + ?Sized>(&mut self, density: f64, rng: &mut G) {
        self.grid.randomize(density, rng);
        debug!(density, population = self.grid.population(), "Randomized grid");
        self.render();
    }

    fn advance(&mut self) {
        self.grid = rules::step(&self.grid);
        self.generation += 1;
        self.render();
    }

    // Drops the timer; returns whether one was active
    fn halt(&mut self) -> bool {
        self.timer.take().is_some()
    }

    fn render(&mut self) {
        self.sink.draw(&self.grid);
    }
}
