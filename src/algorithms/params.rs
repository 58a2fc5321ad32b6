//! Heuristic search parameters.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Knobs shared by the local search and annealing drivers.
///
/// The defaults are sized for interactive use on small instances; raise
/// `max_iter` and `candidate_moves` together for harder ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Hard cap on search iterations.
    pub max_iter: u64,
    /// Stop after this many consecutive evaluated candidates brought no
    /// improvement to the best cost.
    pub candidate_moves: u64,
    /// Starting temperature of the annealing acceptance rule.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied after each evaluated candidate.
    pub cooling_rate: f64,
    /// Seed of the driver's private random stream; `None` draws from the
    /// system entropy source and makes the run non-reproducible.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            candidate_moves: 100,
            initial_temperature: 1.0,
            cooling_rate: 0.99,
            seed: None,
        }
    }
}

impl SearchParams {
    /// Returns a copy pinned to `seed`, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the iteration bounds used by every driver.
    pub fn validate_bounds(&self) -> Result<(), ParamsError> {
        if self.max_iter == 0 {
            return Err(ParamsError::ZeroMaxIter);
        }
        if self.candidate_moves == 0 {
            return Err(ParamsError::ZeroCandidateMoves);
        }
        Ok(())
    }

    /// Validates every field, including the temperature schedule.
    pub fn validate_annealing(&self) -> Result<(), ParamsError> {
        self.validate_bounds()?;
        if !(self.initial_temperature > 0.0) {
            return Err(ParamsError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ParamsError::CoolingRateOutOfRange(self.cooling_rate));
        }
        Ok(())
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parameter violations rejected before a search starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("max_iter must be at least 1")]
    ZeroMaxIter,

    #[error("candidate_moves must be at least 1")]
    ZeroCandidateMoves,

    #[error("initial temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling rate must be strictly between 0 and 1, got {0}")]
    CoolingRateOutOfRange(f64),
}
