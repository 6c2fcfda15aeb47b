//! # Convergence Demo
//!
//! Scatters a handful of random points, runs the genetic algorithm with the
//! default settings, and logs the best cycle cost after every generation.
//!
//! Run with `cargo run --example convergence`.

use anyhow::Result;
use rand::Rng;
use tsp_ga::Service;
use tsp_ga::models::{Point, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Random points on the original 600x600 canvas.
    let mut rng = rand::rng();
    let points: Vec<Point> = (0..15)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..600.0),
                rng.random_range(0.0..600.0),
            )
        })
        .collect();

    let service = Service::new(Settings::default());
    let outcome = service.optimize_with(&points, rng, |progress| {
        tracing::info!(
            remaining = progress.remaining,
            best_cost = progress.best_cost,
            "Generation complete"
        );
    })?;

    tracing::info!(cost = outcome.cost, "Evolution finished");
    for point in outcome.tour.points() {
        println!("({:.1}, {:.1})", point.x, point.y);
    }
    println!("total cycle cost: {}", outcome.cost);

    Ok(())
}
