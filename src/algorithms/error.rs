use thiserror::Error;

use super::params::ParamsError;

/// Failure modes of the solving surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// The greedy constructor could not place every task within the
    /// horizon; the instance does not admit a covering greedy schedule.
    #[error("{unplaced} of {total} tasks do not fit within the scheduling horizon")]
    Incomplete { unplaced: usize, total: usize },

    #[error(transparent)]
    Params(#[from] ParamsError),
}
