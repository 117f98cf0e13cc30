//! Find the closest pair among a few points.
use closest_pair::prelude::*;

fn main() -> Result<(), ClosestPairError> {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(7.0, 7.0),
        Point::new(2.5, 0.5),
    ];

    let pair = closest_pair(&points)?;
    let (i, j) = pair.indices();
    println!("Closest pair: {:?} (#{i}) and {:?} (#{j})", pair.first(), pair.second());
    println!("Distance: {}", pair.distance());
    Ok(())
}
