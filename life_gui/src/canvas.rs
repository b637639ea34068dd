// canvas.rs - egui render sink: a snapshot of the grid painted each frame

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use life::config::{parse_hex_color, DisplayConfig};
use life::{Grid, RenderSink};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
}

impl Palette {
    pub fn from_config(display: &DisplayConfig) -> life::error::Result<Self> {
        let [r, g, b] = parse_hex_color(&display.alive_color)?;
        let alive = Color32::from_rgb(r, g, b);
        let [r, g, b] = parse_hex_color(&display.dead_color)?;
        let dead = Color32::from_rgb(r, g, b);
        Ok(Self { alive, dead })
    }
}

/// Copy of the cells handed to `draw`, kept until the next frame paints it.
#[derive(Debug, Default)]
pub struct CanvasSink {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    frames: u64,
}

impl RenderSink for CanvasSink {
    fn draw(&mut self, grid: &Grid) {
        self.width = grid.width();
        self.height = grid.height();
        self.cells.clear();
        self.cells.extend(grid.rows().flatten().map(|cell| cell.is_alive()));
        self.frames += 1;
    }
}

impl CanvasSink {
    /// Number of draws received so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cell_size(&self, canvas: Rect) -> Vec2 {
        Vec2::new(
            canvas.width() / self.width.max(1) as f32,
            canvas.height() / self.height.max(1) as f32,
        )
    }

    /// Grid coordinate under `pos`: floor of the offset divided by the cell
    /// size. Positions left of or above the canvas give `None`; positions past
    /// the far edges are returned as-is and rejected by the grid.
    pub fn cell_at(&self, canvas: Rect, pos: Pos2) -> Option<(usize, usize)> {
        let offset = pos - canvas.min;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }
        let size = self.cell_size(canvas);
        Some(((offset.x / size.x).floor() as usize, (offset.y / size.y).floor() as usize))
    }

    pub fn paint(&self, painter: &egui::Painter, canvas: Rect, palette: Palette) {
        painter.rect_filled(canvas, 0.0, palette.dead);

        let size = self.cell_size(canvas);
        for (index, &alive) in self.cells.iter().enumerate() {
            let (x, y) = (index % self.width, index / self.width);
            let rect = Rect::from_min_size(
                canvas.min + Vec2::new(x as f32 * size.x, y as f32 * size.y),
                size,
            );

            let cell_color = if alive { palette.alive } else { palette.dead };
            painter.rect_filled(rect, 0.0, cell_color);

            // Draw subtle border
            painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life::Cell;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(100.0))
    }

    #[test]
    fn test_draw_copies_cells() {
        let mut sink = CanvasSink::default();
        let grid: Grid = "#.\n.#".parse().unwrap();
        sink.draw(&grid);
        assert_eq!(sink.cells, vec![true, false, false, true]);
        assert_eq!(sink.frames(), 1);
    }

    #[test]
    fn test_cell_at_floors_offsets() {
        let mut sink = CanvasSink::default();
        sink.draw(&Grid::new(4, 5, Cell::Dead));
        // Cells are 25 wide and 20 tall
        assert_eq!(sink.cell_at(canvas(), Pos2::new(10.0, 20.0)), Some((0, 0)));
        assert_eq!(sink.cell_at(canvas(), Pos2::new(34.9, 39.9)), Some((0, 0)));
        assert_eq!(sink.cell_at(canvas(), Pos2::new(35.0, 40.0)), Some((1, 1)));
        assert_eq!(sink.cell_at(canvas(), Pos2::new(109.0, 119.0)), Some((3, 4)));
        assert_eq!(sink.cell_at(canvas(), Pos2::new(5.0, 30.0)), None);
    }

    #[test]
    fn test_palette_from_default_config() {
        let palette = Palette::from_config(&DisplayConfig::default()).unwrap();
        assert_eq!(palette.alive, Color32::from_rgb(0xF3, 0xF3, 0x7B));
        assert_eq!(palette.dead, Color32::from_rgb(0x21, 0x21, 0x21));
    }
}
