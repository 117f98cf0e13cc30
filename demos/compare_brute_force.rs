//! Cross-check the divide-and-conquer result against brute force on random grids.
use closest_pair::prelude::*;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), ClosestPairError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2026);
    let side = 51;

    for round in 0..20 {
        let n = rng.random_range(2..=500);
        let points: Vec<Point> = sample(&mut rng, side * side, n)
            .into_iter()
            .map(|cell| Point::from(((cell / side) as f64, (cell % side) as f64)))
            .collect();

        let fast = closest_pair(&points)?;
        let slow = brute_force(&points)?;
        let status = if fast.distance() == slow.distance() { "ok" } else { "MISMATCH" };
        println!(
            "round {round:>2}: n = {n:>3}  divide and conquer {:.4}  brute force {:.4}  {status}",
            fast.distance(),
            slow.distance()
        );
    }
    Ok(())
}
