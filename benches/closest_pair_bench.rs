//! Timing of the divide-and-conquer solver against brute force

use closest_pair::{ClosestPairSolver, Point, SolverConfig, brute_force};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn random_points<R: Rng>(rng: &mut R, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn main() {
    println!("Closest Pair Benchmark");
    println!("======================\n");

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let solver = ClosestPairSolver::default();

    for &n in &[1_000, 10_000, 100_000, 1_000_000] {
        let points = random_points(&mut rng, n);

        let start = Instant::now();
        let (pair, stats) = match solver.solve_with_stats(&points) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("solve failed: {err}");
                return;
            }
        };
        let elapsed = start.elapsed();
        println!(
            "divide and conquer {:>9} points: {:>10.2}ms  distance {:.6}  strip comparisons {}",
            n,
            elapsed.as_secs_f64() * 1000.0,
            pair.distance(),
            stats.strip_comparisons
        );

        // Quadratic; only the small sizes
        if n <= 10_000 {
            let start = Instant::now();
            if let Ok(slow) = brute_force(&points) {
                let elapsed = start.elapsed();
                println!(
                    "brute force        {:>9} points: {:>10.2}ms  distance {:.6}",
                    n,
                    elapsed.as_secs_f64() * 1000.0,
                    slow.distance()
                );
            }
        }
    }

    println!("\nLeaf size sweep (100000 points)");
    println!("===============================");
    let points = random_points(&mut rng, 100_000);
    for leaf_size in [3, 8, 16, 32, 64] {
        let solver = ClosestPairSolver::new(SolverConfig::new().with_leaf_size(leaf_size));
        let start = Instant::now();
        if let Ok(pair) = solver.solve(&points) {
            let elapsed = start.elapsed();
            println!(
                "leaf_size {:>3}: {:>10.2}ms  distance {:.6}",
                leaf_size,
                elapsed.as_secs_f64() * 1000.0,
                pair.distance()
            );
        }
    }
}
