//! slotsched - multi-agent task scheduling over capacitated time slots.
//!
//! Each agent owns a directed acyclic graph of sized tasks. Every task must
//! land in exactly one time slot so that per-slot capacity and intra-agent
//! precedence hold; the objective is the maximum over agents of the mean
//! 1-indexed completion slot. A greedy constructor builds the initial
//! schedule, which local search or simulated annealing then refine over a
//! shared neighborhood of swap, relocate, and group-swap moves.

pub mod algorithms;
pub mod problem;
pub mod schedule;

pub use algorithms::{
    Greedy, LocalSearch, ParamsError, SearchParams, SimulatedAnnealing, SolveError, Solver,
};
pub use problem::{AgentDag, Problem, ProblemError};
pub use schedule::{is_feasible, max_mean_completion, Schedule, TaskRef};

#[cfg(test)]
pub(crate) mod test_utils;
