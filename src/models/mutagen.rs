use crate::models::Tour;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================
// MutationRate
// ============================================================

/// Percent chance (0-100) that a bred child is mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct MutationRate(u8);

#[derive(Debug, thiserror::Error)]
#[error("mutation rate must be between 0 and 100 percent, got {0}")]
pub struct MutationRateOutOfRange(u8);

impl MutationRate {
    pub fn percent(value: u8) -> Result<Self, MutationRateOutOfRange> {
        if value > 100 {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for MutationRate {
    fn default() -> Self {
        Self(50)
    }
}

// ============================================================
// Mutagen
// ============================================================

/// Applies the relocation mutation to bred children with the configured
/// percent probability, rolled independently per child.
#[derive(Debug, Clone)]
pub(crate) struct Mutagen {
    rate: MutationRate,
}

impl Mutagen {
    pub(crate) fn new(rate: MutationRate) -> Self {
        Self { rate }
    }

    /// Rolls the mutation chance for one bred child.
    pub(crate) fn maybe_mutate<R: Rng>(&self, rng: &mut R, tour: &mut Tour) {
        if rng.random_range(0..100) < self.rate.value() {
            Self::relocate(rng, tour);
        }
    }

    /// Removes one random gene and reinserts it at a random position,
    /// possibly the one it came from.
    fn relocate<R: Rng>(rng: &mut R, tour: &mut Tour) {
        if tour.points.len() < 2 {
            return;
        }

        let from = rng.random_range(0..tour.points.len());
        let gene = tour.points.remove(from);
        let to = rng.random_range(0..tour.points.len());
        tour.points.insert(to, gene);
    }
}
