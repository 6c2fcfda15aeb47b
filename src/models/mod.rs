mod crossover;
mod mutagen;
mod point;
mod population;
mod ranking;
mod settings;
mod tour;

pub use mutagen::{MutationRate, MutationRateOutOfRange};
pub use point::{Cost, Point, dedup_points};
pub use population::Population;
pub use ranking::{RankedTour, Ranking};
pub use settings::{Settings, SettingsError};
pub use tour::Tour;

pub(crate) use crossover::{InvalidOffspring, crossover};
pub(crate) use mutagen::Mutagen;
