//! Conway's Game of Life (B3/S23) generation step.
//!
//! Every cell of the next generation is computed from the previous
//! generation only, so the result does not depend on scan order.

use super::Grid;

/// Pure evolution: returns the next generation, leaving `grid` untouched.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);
    next
}

/// Write the generation after `current` into `next`.
///
/// `next` is a back buffer: its previous contents are overwritten and
/// never read.
///
/// # Panics
///
/// Panics if the two grids differ in size.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.dimensions(),
        next.dimensions(),
        "back buffer must match the current generation's dimensions"
    );

    for (x, y, cell) in current.iter_cells() {
        let neighbors = current.count_alive_neighbors(x, y);
        next.set(x, y, cell.evolve(neighbors));
    }
}
