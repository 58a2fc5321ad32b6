//! Strict-improvement neighborhood search.

use crate::problem::Problem;
use crate::schedule::{is_feasible, max_mean_completion, Schedule};

use super::greedy::feasible_seed;
use super::moves::apply_random_move;
use super::{SearchParams, SolveError, Solver};

/// Local search driver.
///
/// Every iteration mutates a copy of the incumbent best schedule with one
/// random move and accepts the candidate only when it is feasible and
/// strictly cheaper, so the returned cost never exceeds the greedy seed's.
/// The search stops after `candidate_moves` consecutive feasible candidates
/// without improvement, or at the iteration cap. Failed moves and
/// infeasible candidates spend an iteration without advancing the
/// stagnation counter.
#[derive(Debug, Clone)]
pub struct LocalSearch {
    params: SearchParams,
}

impl LocalSearch {
    /// Creates a driver with the given parameters.
    ///
    /// The iteration bounds are validated at the start of every
    /// [`solve`](Solver::solve) call.
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self {
            params: SearchParams::default(),
        }
    }
}

impl Solver for LocalSearch {
    fn solve(&self, problem: &Problem) -> Result<Schedule, SolveError> {
        self.params.validate_bounds()?;

        let mut rng = self.params.rng();
        let num_agents = problem.num_agents();

        let mut best = feasible_seed(problem)?;
        let mut best_cost = max_mean_completion(&best, num_agents);
        let mut no_improve = 0u64;

        for _ in 0..self.params.max_iter {
            let mut candidate = best.clone();
            if !apply_random_move(&mut candidate, problem, &mut rng) {
                continue;
            }
            if !is_feasible(&candidate, problem) {
                continue;
            }

            let cost = max_mean_completion(&candidate, num_agents);
            if cost < best_cost {
                best = candidate;
                best_cost = cost;
                no_improve = 0;
            } else {
                no_improve += 1;
            }
            if no_improve >= self.params.candidate_moves {
                break;
            }
        }

        Ok(best)
    }
}
