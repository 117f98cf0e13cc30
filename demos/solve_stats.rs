//! Inspect recursion counters, with solver tracing printed to stderr.
//!
//! Run with `RUST_LOG=closest_pair=trace` to see every merge step.
use closest_pair::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClosestPairError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // A spiral, so every level has work to do in the strip
    let points: Vec<Point> = (0..200_i32)
        .map(|i| {
            let t = f64::from(i) * 0.3;
            Point::new(t * t.cos(), t * t.sin())
        })
        .collect();

    let solver = ClosestPairSolver::new(SolverConfig::new().with_leaf_size(4));
    let (pair, stats) = solver.solve_with_stats(&points)?;

    println!("Closest pair indices: {:?}", pair.indices());
    println!("Distance: {:.6}", pair.distance());
    println!("{stats:#?}");
    Ok(())
}
