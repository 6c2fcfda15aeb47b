use crate::models::{Cost, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered sequence of points visited exactly once, interpreted as a
/// closed cycle: the leg from the last point back to the first is part of
/// the cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub(crate) points: Vec<Point>,
}

impl Tour {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Produces a uniformly random permutation of `points` by repeatedly
    /// extracting a random remaining element. The input is not mutated.
    pub fn random<R: Rng>(points: &[Point], rng: &mut R) -> Self {
        let mut remaining = points.to_vec();
        let mut order = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let index = rng.random_range(0..remaining.len());
            order.push(remaining.remove(index));
        }

        Self { points: order }
    }

    /// Total cycle distance: the sum over consecutive pairs plus the
    /// closing leg. Tours with fewer than two points cost nothing.
    pub fn cost(&self) -> Cost {
        let [first, .., last] = self.points.as_slice() else {
            return 0;
        };

        let legs: Cost = self
            .points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum();

        legs + last.distance(first)
    }

    /// True iff no two positions hold equal points. A tour that fails this
    /// check must never enter a population.
    pub fn is_valid(&self) -> bool {
        self.points
            .iter()
            .enumerate()
            .all(|(index, point)| !self.points[index + 1..].contains(point))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
