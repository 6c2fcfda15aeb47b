mod errors;

pub use errors::Error;

use crate::models::{
    Cost, InvalidOffspring, Mutagen, Point, Population, RankedTour, Ranking, Settings, Tour,
    crossover, dedup_points,
};
use rand::Rng;
use tracing::instrument;

/// Entry point for evolution runs.
///
/// Holds the settings shared by every run it starts; the point set and the
/// random source are supplied per run, so one service can serve many
/// independent optimizations.
///
/// # Examples
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use tsp_ga::Service;
/// use tsp_ga::models::{Point, Settings};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 4.0),
/// ];
///
/// let service = Service::new(Settings::default());
/// let outcome = service.optimize(&points, StdRng::seed_from_u64(42))?;
///
/// // Every cycle through a 3-4-5 triangle has the same cost.
/// assert_eq!(outcome.cost, 12);
/// # Ok::<(), tsp_ga::service::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Service {
    settings: Settings,
}

/// Per-generation progress: how many generations remain and the best cycle
/// cost in the newly formed population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub remaining: usize,
    pub best_cost: Cost,
}

/// Final result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub tour: Tour,
    pub cost: Cost,
}

impl Service {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Deduplicates the input, checks the precondition, and builds the
    /// initial random population. The returned [`Run`] is stepped by the
    /// caller, one generation at a time.
    #[instrument(level = "info", skip(self, points, rng), fields(raw_points = points.len()))]
    pub fn start<R: Rng>(&self, points: &[Point], mut rng: R) -> Result<Run<R>, Error> {
        let distinct = dedup_points(points);
        if distinct.len() < 2 {
            return Err(Error::InsufficientPoints {
                found: distinct.len(),
            });
        }

        tracing::info!(
            distinct_points = distinct.len(),
            population_size = self.settings.population_size(),
            generations = self.settings.generations(),
            "Starting evolution run"
        );

        let population = Population::random(&distinct, self.settings.population_size(), &mut rng);

        Ok(Run {
            mutagen: Mutagen::new(self.settings.mutation_rate()),
            settings: self.settings.clone(),
            rng,
            population,
            remaining: self.settings.generations(),
        })
    }

    /// Runs an evolution to completion and returns the best tour found.
    pub fn optimize<R: Rng>(&self, points: &[Point], rng: R) -> Result<Outcome, Error> {
        self.optimize_with(points, rng, |_| {})
    }

    /// Like [`Service::optimize`], invoking `on_generation` after each
    /// completed generation.
    pub fn optimize_with<R: Rng>(
        &self,
        points: &[Point],
        rng: R,
        mut on_generation: impl FnMut(Progress),
    ) -> Result<Outcome, Error> {
        let mut run = self.start(points, rng)?;

        while let Some(progress) = run.step() {
            on_generation(progress);
        }

        Ok(run.into_outcome())
    }
}

/// A single evolution in progress: running while generations remain, done
/// once the budget is spent.
///
/// Each [`Run::step`] call advances the population by one cull-and-breed
/// cycle; the host controls pacing and may simply stop stepping to abort
/// between generations.
#[derive(Debug)]
pub struct Run<R: Rng> {
    settings: Settings,
    mutagen: Mutagen,
    rng: R,
    population: Population,
    remaining: usize,
}

impl<R: Rng> Run<R> {
    /// Advances the evolution by one generation. Returns `None` once the
    /// generation budget is spent.
    #[instrument(level = "debug", skip(self), fields(remaining = self.remaining))]
    pub fn step(&mut self) -> Option<Progress> {
        if self.remaining == 0 {
            return None;
        }

        self.population = self.next_generation();
        self.remaining -= 1;

        let best_cost = self
            .population
            .best()
            .map(|entry| entry.cost)
            .unwrap_or_default();
        tracing::debug!(
            remaining = self.remaining,
            best_cost = best_cost,
            "Generation complete"
        );

        Some(Progress {
            remaining: self.remaining,
            best_cost,
        })
    }

    /// One generation: rank, cull the worst, refill by breeding survivor
    /// pairs with chance mutation.
    fn next_generation(&mut self) -> Population {
        let ranking = Ranking::rank(&self.population);
        let survivors = ranking.cull(self.settings.killing_rate());

        let mut next = survivors.clone();
        if survivors.len() >= 2 {
            let deficit = self.settings.population_size().saturating_sub(next.len());
            for _ in 0..deficit {
                // Every attempt draws from the full survivor pool again.
                let (lhs, rhs) = draw_parents(&mut self.rng, &survivors);
                match crossover(&mut self.rng, lhs, rhs) {
                    Ok(mut child) => {
                        self.mutagen.maybe_mutate(&mut self.rng, &mut child);
                        next.push(child);
                    }
                    // The slot is skipped, not retried.
                    Err(InvalidOffspring) => {}
                }
            }
        }

        if next.len() < self.settings.population_size() {
            tracing::warn!(
                bred = next.len(),
                population_size = self.settings.population_size(),
                "Generation came up short after discarding invalid offspring"
            );
        }

        Population::from_tours(next)
    }

    /// The winner of the current population.
    pub fn best(&self) -> Option<RankedTour> {
        self.population.best()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes the run and returns the best tour of the final population.
    pub fn into_outcome(self) -> Outcome {
        // The population is never empty: settings guarantee at least two
        // survivors per generation and `start` rejects degenerate input.
        match self.population.best() {
            Some(RankedTour { tour, cost }) => Outcome { tour, cost },
            None => Outcome {
                tour: Tour::new(Vec::new()),
                cost: 0,
            },
        }
    }
}

/// Draws two distinct parents uniformly, without replacement, from the
/// survivor pool. Requires at least two survivors.
fn draw_parents<'a, R: Rng>(rng: &mut R, survivors: &'a [Tour]) -> (&'a Tour, &'a Tour) {
    let first = rng.random_range(0..survivors.len());
    let mut second = rng.random_range(0..survivors.len() - 1);
    if second >= first {
        second += 1;
    }

    (&survivors[first], &survivors[second])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn scatter(count: usize) -> Vec<Point> {
        // Deterministic non-collinear scatter, distinct by construction.
        (0..count)
            .map(|index| {
                let x = (index * 83 % 101) as f64;
                let y = (index * 47 % 97) as f64;
                Point::new(x, y)
            })
            .collect()
    }

    fn small_settings(generations: usize) -> Settings {
        Settings::new(20, 10, generations, crate::models::MutationRate::default())
            .expect("settings are valid")
    }

    #[test]
    fn it_rejects_insufficient_points() {
        let service = Service::new(small_settings(10));
        let rng = StdRng::seed_from_u64(42);

        let result = service.start(&[Point::new(1.0, 1.0)], rng);

        assert_eq!(
            result.err(),
            Some(Error::InsufficientPoints { found: 1 })
        );
    }

    #[test]
    fn it_rejects_duplicates_that_collapse_to_one_point() {
        let service = Service::new(small_settings(10));
        let rng = StdRng::seed_from_u64(42);
        let points = vec![Point::new(1.0, 1.0); 5];

        let result = service.start(&points, rng);

        assert_eq!(
            result.err(),
            Some(Error::InsufficientPoints { found: 1 })
        );
    }

    #[test]
    fn a_run_steps_through_its_generation_budget() {
        let service = Service::new(small_settings(3));
        let rng = StdRng::seed_from_u64(42);
        let mut run = service.start(&scatter(6), rng).unwrap();

        assert_eq!(run.remaining(), 3);
        assert!(!run.is_done());

        assert_eq!(run.step().map(|progress| progress.remaining), Some(2));
        assert_eq!(run.step().map(|progress| progress.remaining), Some(1));
        assert_eq!(run.step().map(|progress| progress.remaining), Some(0));
        assert!(run.is_done());
        assert_eq!(run.step(), None);
    }

    #[test]
    fn every_generation_holds_only_valid_full_length_tours() {
        let service = Service::new(small_settings(10));
        let rng = StdRng::seed_from_u64(42);
        let points = scatter(8);
        let mut run = service.start(&points, rng).unwrap();

        while run.step().is_some() {
            assert_eq!(run.population().len(), 20);
            for tour in run.population().tours() {
                assert_eq!(tour.len(), points.len());
                assert!(tour.is_valid());
            }
        }
    }

    #[test]
    fn survivors_carry_over_unchanged() {
        let service = Service::new(small_settings(1));
        let rng = StdRng::seed_from_u64(42);
        let mut run = service.start(&scatter(7), rng).unwrap();

        let survivors = Ranking::rank(run.population()).cull(10);
        run.step();

        for survivor in &survivors {
            assert!(run.population().tours().contains(survivor));
        }
    }

    #[test]
    fn the_best_cost_never_regresses_for_survivor_protected_runs() {
        // Culling protects survivors, so the reported best can only improve
        // or hold; newly bred tours may be worse but never displace it.
        let service = Service::new(small_settings(15));
        let rng = StdRng::seed_from_u64(42);
        let mut run = service.start(&scatter(9), rng).unwrap();

        let mut previous = run.best().map(|entry| entry.cost).unwrap();
        while let Some(progress) = run.step() {
            assert!(progress.best_cost <= previous);
            previous = progress.best_cost;
        }
    }

    #[test]
    fn zero_generations_returns_the_initial_winner_untouched() {
        let service = Service::new(small_settings(0));
        let rng = StdRng::seed_from_u64(42);
        let mut run = service.start(&scatter(6), rng).unwrap();

        let initial_best = run.best().unwrap();
        assert_eq!(run.step(), None);

        let outcome = run.into_outcome();
        assert_eq!(outcome.tour, initial_best.tour);
        assert_eq!(outcome.cost, initial_best.cost);
    }

    #[test]
    fn optimize_with_reports_one_progress_per_generation() {
        let service = Service::new(small_settings(5));
        let rng = StdRng::seed_from_u64(42);
        let mut reported = Vec::new();

        let outcome = service
            .optimize_with(&scatter(6), rng, |progress| reported.push(progress))
            .unwrap();

        assert_eq!(reported.len(), 5);
        assert_eq!(reported.last().map(|progress| progress.remaining), Some(0));
        assert_eq!(reported.last().map(|progress| progress.best_cost), Some(outcome.cost));
    }
}
