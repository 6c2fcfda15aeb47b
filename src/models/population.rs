use crate::models::{Point, RankedTour, Tour};
use rand::Rng;
use tracing::instrument;

/// The set of candidate tours considered in one generation.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Builds the initial population: `size` independent random tours over
    /// the same point set.
    #[instrument(level = "debug", skip(points, rng), fields(distinct_points = points.len(), size = size))]
    pub fn random<R: Rng>(points: &[Point], size: usize, rng: &mut R) -> Self {
        let tours = (0..size).map(|_| Tour::random(points, rng)).collect();

        Self { tours }
    }

    pub(crate) fn from_tours(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// The current winner: the lowest-cost tour, evaluated without sorting.
    /// On ties this agrees with the last entry of a full ranking.
    pub fn best(&self) -> Option<RankedTour> {
        let mut winner: Option<RankedTour> = None;

        for tour in &self.tours {
            let cost = tour.cost();
            if winner.as_ref().is_none_or(|entry| cost <= entry.cost) {
                winner = Some(RankedTour {
                    tour: tour.clone(),
                    cost,
                });
            }
        }

        winner
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}
