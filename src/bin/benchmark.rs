//! Generation step throughput, pure vs double-buffered

use std::time::Instant;
use pixel_life::{Grid, application::config::{GRID_HEIGHT, GRID_WIDTH}, domain::{step, step_into}};

fn random_grid(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height).expect("benchmark sizes are non-zero");
    grid.randomize(&mut rand::rng(), 0.3);
    grid
}

/// Milliseconds per generation allocating a new grid each step
fn benchmark_step(width: usize, height: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Milliseconds per generation reusing a back buffer
fn benchmark_double_buffer(width: usize, height: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(width, height);
    let mut scratch = grid.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        step_into(&grid, &mut scratch);
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [(GRID_WIDTH, GRID_HEIGHT), (200, 200), (500, 500), (1000, 1000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>14} {:>16}", "Size", "Step", "DoubleBuffer", "Cells/sec");
    println!("{:-<58}", "");

    for (width, height) in sizes {
        let step_ms = benchmark_step(width, height, iterations);
        let buffered_ms = benchmark_double_buffer(width, height, iterations);
        let cells = (width * height) as f64;

        println!(
            "{:>12} {:>12.3} {:>14.3} {:>15.1}M",
            format!("{}x{}", width, height),
            step_ms,
            buffered_ms,
            cells / (buffered_ms / 1000.0) / 1_000_000.0
        );
    }
}
