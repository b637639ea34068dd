// grid.rs - Grid types for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::GridError;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Largest number of cells a user-requested grid may hold.
pub const MAX_CELLS: usize = 1 << 20;

/// Whether a `width` x `height` grid is non-empty and within `MAX_CELLS`.
pub fn size_allowed(width: usize, height: usize) -> bool {
    width >= 1 && height >= 1 && width.checked_mul(height).is_some_and(|cells| cells <= MAX_CELLS)
}

/// Rectangular cell matrix, stored row-major.
///
/// Width and height are fixed for the lifetime of a grid and both are at
/// least 1. `(x, y)` addresses column `x` of row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell set to `fill`.
    ///
    /// Panics if either dimension is zero; callers validate user input first.
    pub fn new(width: usize, height: usize, fill: Cell) -> Self {
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1, got {width}x{height}");
        let cells = width.checked_mul(height).expect("grid cell count overflows usize");
        Self { width, height, cells: vec![fill; cells] }
    }

    /// Builds a grid from explicit rows. Panics on empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1, got {width}x{height}");
        assert!(rows.iter().all(|row| row.len() == width), "grid rows must all have length {width}");

        Self { width, height, cells: rows.into_iter().flatten().collect() }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.in_bounds(x, y).then(|| self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let index = self.index(x, y)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Flips the cell at `(x, y)`. Out-of-bounds coordinates are rejected
    /// and leave the grid untouched.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let index = self.index(x, y)?;
        self.cells[index] = self.cells[index].toggled();
        Ok(self.cells[index])
    }

    /// Sets every cell to `fill` in place.
    pub fn clear(&mut self, fill: Cell) {
        self.cells.fill(fill);
    }

    /// Re-rolls every cell: a uniform draw `r` in `[0, 1)` makes the cell
    /// dead when `r > density` and alive otherwise.
    ///
    /// Note the direction: a cell stays alive when the draw is at or below
    /// `density`, so `1.0` fills the grid and `0.0` empties it.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in &mut self.cells {
            let r: f64 = rng.r#gen();
            *cell = if r > density { Cell::Dead } else { Cell::Alive };
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the `#`/`.` text form written by `Display`.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (y, line) in s.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate() {
            let row = line
                .chars()
                .map(|c| match c {
                    '#' => Ok(Cell::Alive),
                    '.' => Ok(Cell::Dead),
                    other => Err(GridError::Parse(format!("unexpected character {other:?} on row {y}"))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Parse("empty grid".into()));
        }
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(GridError::Parse(format!("row {y} has length {}, expected {width}", rows[y].len())));
        }
        Ok(Grid::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_fills_every_cell() {
        let grid = Grid::new(4, 3, Cell::Alive);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 12);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        Grid::new(0, 5, Cell::Dead);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_overflowing_size_panics() {
        Grid::new(usize::MAX, 2, Cell::Dead);
    }

    #[test]
    fn test_size_allowed() {
        assert!(size_allowed(20, 20));
        assert!(size_allowed(1024, 1024));
        assert!(!size_allowed(1025, 1024));
        assert!(!size_allowed(0, 5));
        assert!(!size_allowed(usize::MAX / 2, 3));
    }

    #[test]
    #[should_panic]
    fn test_ragged_rows_panic() {
        Grid::from_rows(vec![vec![Cell::Dead; 2], vec![Cell::Dead; 3]]);
    }

    #[test]
    fn test_clear_covers_non_square_grids() {
        let mut grid = Grid::new(5, 2, Cell::Alive);
        grid.clear(Cell::Dead);
        assert_eq!(grid, Grid::new(5, 2, Cell::Dead));
    }

    #[test]
    fn test_toggle_flips_and_flips_back() {
        let mut grid = Grid::new(3, 3, Cell::Dead);
        assert_eq!(grid.toggle(2, 1), Ok(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(grid.toggle(2, 1), Ok(Cell::Dead));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(3, 2, Cell::Dead);
        let before = grid.clone();
        assert_eq!(
            grid.toggle(3, 0),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.toggle(0, 2).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_x_is_column_y_is_row() {
        let mut grid = Grid::new(3, 2, Cell::Dead);
        grid.set(2, 0, Cell::Alive).unwrap();
        assert_eq!(grid.to_string(), "..#\n...\n");
    }

    #[test]
    fn test_randomize_density_one_is_all_alive() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10, Cell::Dead);
        grid.randomize(1.0, &mut rng);
        assert_eq!(grid.population(), 100);
    }

    #[test]
    fn test_randomize_density_zero_is_all_dead() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10, Cell::Alive);
        grid.randomize(0.0, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let mut a = Grid::new(8, 8, Cell::Dead);
        let mut b = Grid::new(8, 8, Cell::Dead);
        a.randomize(0.3, &mut ChaCha8Rng::seed_from_u64(42));
        b.randomize(0.3, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_form_parses_back() {
        let grid: Grid = ".#.\n##.\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Dead));
        assert_eq!(grid.to_string(), ".#.\n##.\n");
    }

    #[test]
    fn test_text_form_rejects_bad_input() {
        assert!(matches!("".parse::<Grid>(), Err(GridError::Parse(_))));
        assert!(matches!("..\n...".parse::<Grid>(), Err(GridError::Parse(_))));
        assert!(matches!(".x.".parse::<Grid>(), Err(GridError::Parse(_))));
    }
}
