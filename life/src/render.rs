// render.rs - Sinks that receive the grid after every mutation

use crate::grid::Grid;

/// Consumer of the current grid.
///
/// `draw` gets read-only access for the duration of the call; sinks that need
/// the cells later must copy what they need.
pub trait RenderSink {
    fn draw(&mut self, grid: &Grid);
}

/// Keeps a copy of every frame it is handed.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub frames: Vec<Grid>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, grid: &Grid) {
        self.frames.push(grid.clone());
    }
}
