/// Errors that can occur when starting an evolution run.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum Error {
    /// Fewer than two distinct points remained after deduplication. There
    /// is nothing to optimize, so the run is rejected before a population
    /// is built.
    #[error("at least 2 distinct points are required to run, got {found}")]
    InsufficientPoints { found: usize },
}
