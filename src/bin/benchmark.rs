//! Time `Engine::step` on random grids of increasing size

use std::time::Instant;

use term_life::{Engine, Grid};

const DENSITY: f64 = 0.3;

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let engine = Engine::new();
    let mut rng = rand::rng();
    let mut grid = match Grid::random(size, size, DENSITY, &mut rng) {
        Ok(grid) => grid,
        Err(err) => panic!("{size}x{size} grid: {err}"),
    };

    let start = Instant::now();
    for _ in 0..iterations {
        grid = engine.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [10, 50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "M cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
