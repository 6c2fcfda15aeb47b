use crate::models::{Cost, Population, Tour};
use tracing::instrument;

/// A tour paired with its evaluated cycle cost.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTour {
    pub tour: Tour,
    pub cost: Cost,
}

/// A population ordered from worst (highest cost) to best (lowest cost).
///
/// The winner is always the **last** entry and culling removes entries from
/// the **front**. Equal costs keep their population order (stable sort), so
/// ties carry no further guarantee.
#[derive(Debug)]
#[cfg_attr(test, derive(Clone, PartialEq))]
pub struct Ranking {
    entries: Vec<RankedTour>,
}

impl Ranking {
    /// Evaluates every tour of the population and sorts worst-first.
    #[instrument(level = "debug", skip(population), fields(population_size = population.len()))]
    pub fn rank(population: &Population) -> Self {
        let mut entries: Vec<RankedTour> = population
            .tours()
            .iter()
            .map(|tour| RankedTour {
                tour: tour.clone(),
                cost: tour.cost(),
            })
            .collect();

        entries.sort_by(|a, b| b.cost.cmp(&a.cost));

        Self { entries }
    }

    /// The lowest-cost entry, i.e. the last one.
    pub fn best(&self) -> Option<&RankedTour> {
        self.entries.last()
    }

    /// Drops the first `killing_rate` entries (the worst performers) and
    /// returns the surviving tours, still ordered worst-first.
    pub(crate) fn cull(mut self, killing_rate: usize) -> Vec<Tour> {
        let culled = killing_rate.min(self.entries.len());
        self.entries.drain(..culled);

        self.entries.into_iter().map(|entry| entry.tour).collect()
    }

    pub fn entries(&self) -> &[RankedTour] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
