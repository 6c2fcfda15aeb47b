use crate::models::MutationRate;
use serde::{Deserialize, Serialize};

/// Evolution parameters for one optimization run.
///
/// Replaces the original program's process-wide knobs with an explicit,
/// validated value handed to the driver at construction.
///
/// # Parameters
///
/// - `population_size`: number of tours per generation (default 100)
/// - `killing_rate`: number of worst performers removed before breeding
///   (default `population_size / 2`)
/// - `generations`: how many cull-and-breed cycles to run (default 100)
/// - `mutation_rate`: percent chance a bred child is mutated (default 50)
///
/// # Examples
///
/// ```rust
/// use tsp_ga::models::{MutationRate, Settings};
///
/// let defaults = Settings::default();
///
/// let custom = Settings::new(200, 120, 500, MutationRate::percent(30)?)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Settings {
    population_size: usize,
    killing_rate: usize,
    generations: usize,
    mutation_rate: MutationRate,
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SettingsError {
    /// Breeding draws two distinct parents, so the smallest workable
    /// population is two tours.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    /// Culling must leave at least two survivors to breed from.
    #[error("killing rate {killing_rate} leaves fewer than 2 survivors in a population of {population_size}")]
    TooFewSurvivors {
        population_size: usize,
        killing_rate: usize,
    },
}

impl Settings {
    pub fn new(
        population_size: usize,
        killing_rate: usize,
        generations: usize,
        mutation_rate: MutationRate,
    ) -> Result<Self, SettingsError> {
        if population_size < 2 {
            return Err(SettingsError::PopulationTooSmall(population_size));
        }

        if population_size - killing_rate.min(population_size) < 2 {
            return Err(SettingsError::TooFewSurvivors {
                population_size,
                killing_rate,
            });
        }

        Ok(Self {
            population_size,
            killing_rate,
            generations,
            mutation_rate,
        })
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn killing_rate(&self) -> usize {
        self.killing_rate
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn mutation_rate(&self) -> MutationRate {
        self.mutation_rate
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            population_size: 100,
            killing_rate: 50,
            generations: 100,
            mutation_rate: MutationRate::default(),
        }
    }
}
