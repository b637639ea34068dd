// rules.rs - Neighbour counting and the B3/S23 step

use crate::grid::{Cell, Grid};

// Neighbour offsets, in visit order
const OFFSETS: [(isize, isize); 8] = [
    (0, 1), (1, 0), (-1, 0), (0, -1),
    (1, 1), (1, -1), (-1, -1), (-1, 1),
];

/// States of the in-bounds neighbours of `(x, y)`.
///
/// The grid does not wrap and has no synthetic border: positions that fall
/// off an edge are skipped, so a corner yields 3 states, an edge 5 and an
/// interior cell 8.
pub fn neighbors(grid: &Grid, x: usize, y: usize) -> impl Iterator<Item = Cell> + '_ {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        grid.get(nx, ny)
    })
}

pub fn count_alive(neighbors: impl IntoIterator<Item = Cell>) -> usize {
    neighbors.into_iter().filter(|cell| cell.is_alive()).count()
}

/// Computes the next generation. The input grid is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let rows = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    let count = count_alive(neighbors(grid, x, y));
                    let alive = grid.get(x, y).is_some_and(Cell::is_alive);

                    match (alive, count) {
                        (true, 2) | (true, 3) => Cell::Alive, // Survival
                        (false, 3) => Cell::Alive,            // Birth
                        _ => Cell::Dead,                      // Death or stays dead
                    }
                })
                .collect()
        })
        .collect();

    Grid::from_rows(rows)
}
