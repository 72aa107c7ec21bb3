//! Performance benchmark comparing serial and parallel generation advance

use life3d::{Algorithm, Dimensions, Grid};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> life3d::Result<f64> {
    let mut grid = Grid::new(Dimensions::new(size, size, size)?)?;
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 175);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_with(algorithm);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> life3d::Result<()> {
    println!("=== 3D Life Performance Benchmark ===\n");

    let sizes = [16, 32, 64, 128];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{0}x{0}x{0}", size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 128usize;
    let cells = size * size * size;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    println!(
        "\nParallel at {0}^3: {1:.2} ms/gen, {2:.1}M cells/sec",
        size,
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
