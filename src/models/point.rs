use serde::{Deserialize, Serialize};

/// Total cycle distance of a tour, in whole units. Lower is better.
pub type Cost = u64;

/// A 2D location visited by a tour.
///
/// Equality is exact coordinate equality. Points are supplied by the host
/// and never mutated by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, rounded to the nearest whole cost unit.
    ///
    /// Integer cost units keep fitness comparison free of floating-point
    /// ranking instability. Symmetric and non-negative.
    pub fn distance(&self, other: &Point) -> Cost {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt().round() as Cost
    }
}

/// Returns the points in first-seen order with any point equal to an
/// earlier one dropped. Idempotent.
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if !distinct.contains(point) {
            distinct.push(*point);
        }
    }
    distinct
}
