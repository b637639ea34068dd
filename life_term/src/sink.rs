// sink.rs - Prints each frame as rows of '#' and '.'

use std::io::{self, Write};

use life::{Grid, RenderSink};

/// Writes every frame it receives. `draw` cannot fail, so the first write
/// error is parked until the event loop collects it with `take_error`.
pub struct TextSink<W: Write> {
    out: W,
    frames: u64,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0, error: None }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn write_frame(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(
            self.out,
            "-- frame {} ({}x{}, {} alive)",
            self.frames,
            grid.width(),
            grid.height(),
            grid.population()
        )?;
        write!(self.out, "{grid}")?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn draw(&mut self, grid: &Grid) {
        self.frames += 1;
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_frame(grid) {
            self.error = Some(err);
        }
    }
}
