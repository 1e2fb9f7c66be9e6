use rand::Rng;

use super::Cell;
use crate::error::{Error, Result};

/// Grid manages the bounded 2D cellular automaton grid.
/// Dimensions are fixed at construction; cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid. Callers translating
    /// user input must validate against [`Grid::contains`] first.
    pub fn toggle(&mut self, x: usize, y: usize) {
        assert!(
            self.contains(x, y),
            "toggle at ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Count live cells in the 3x3 block around `(x, y)`, clipped at the
    /// grid edges (no wraparound), excluding the center itself.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Number of live cells in the whole grid
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fill the grid at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(90, 45).unwrap();
        assert_eq!(grid.dimensions(), (90, 45));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
        assert_eq!(grid.get(9, 9), Some(Cell::Dead));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.toggle(2, 3);
        assert_eq!(grid.get(2, 3), Some(Cell::Alive));
        grid.toggle(2, 3);
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
    }

    #[test]
    #[should_panic]
    fn test_toggle_out_of_range_panics() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.toggle(5, 0);
    }

    #[test]
    fn test_neighbors_exclude_center() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(grid.count_alive_neighbors(1, 1), 0);
        assert_eq!(grid.count_alive_neighbors(0, 0), 1);

        let full = grid_with(
            3,
            3,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        );
        assert_eq!(full.count_alive_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        // Bounded grid: opposite edges are not neighbors
        let grid = grid_with(4, 4, &[(3, 0), (0, 3), (3, 3)]);
        assert_eq!(grid.count_alive_neighbors(0, 0), 0);

        let all: Vec<_> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        let full = grid_with(4, 4, &all);
        assert_eq!(full.count_alive_neighbors(0, 0), 3);
        assert_eq!(full.count_alive_neighbors(3, 3), 3);
        assert_eq!(full.count_alive_neighbors(0, 2), 5);
        assert_eq!(full.count_alive_neighbors(2, 2), 8);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.count_alive_neighbors(0, 0), 0);
    }

    #[test]
    fn test_neighbors_match_brute_force_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut grid = Grid::new(13, 7).unwrap();
            grid.randomize(&mut rng, 0.4);

            for (x, y, _) in grid.iter_cells() {
                let mut expected = 0;
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                        if nx < 0 || ny < 0 {
                            continue;
                        }
                        if grid.get(nx as usize, ny as usize) == Some(Cell::Alive) {
                            expected += 1;
                        }
                    }
                }
                let counted = grid.count_alive_neighbors(x, y);
                assert!(counted <= 8);
                assert_eq!(counted, expected, "neighbors of ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = grid_with(3, 2, &[(2, 1)]);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], (1, 0, Cell::Dead));
        assert_eq!(cells[5], (2, 1, Cell::Alive));
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(20, 20).unwrap();
        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.count_alive(), 400);
        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.count_alive(), 0);
    }
}
