//! Simulated annealing over the shared move neighborhood.

use rand::Rng;

use crate::problem::Problem;
use crate::schedule::{is_feasible, max_mean_completion, Schedule};

use super::greedy::feasible_seed;
use super::moves::apply_random_move;
use super::{SearchParams, SolveError, Solver};

/// Annealing driver.
///
/// Candidates derive from the walking `current` schedule rather than the
/// incumbent best. A worsening feasible candidate is still accepted with
/// probability `exp(-delta / temperature)`; the temperature decays
/// geometrically after every evaluated candidate, while iterations whose
/// move failed or produced an infeasible candidate leave it untouched.
/// The best feasible schedule seen is tracked separately and returned, so
/// the result never costs more than the greedy seed.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    params: SearchParams,
}

impl SimulatedAnnealing {
    /// Creates a driver with the given parameters.
    ///
    /// The full parameter set, including the temperature schedule, is
    /// validated at the start of every [`solve`](Solver::solve) call.
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self {
            params: SearchParams::default(),
        }
    }
}

impl Solver for SimulatedAnnealing {
    fn solve(&self, problem: &Problem) -> Result<Schedule, SolveError> {
        self.params.validate_annealing()?;

        let mut rng = self.params.rng();
        let num_agents = problem.num_agents();

        let mut current = feasible_seed(problem)?;
        let mut best = current.clone();
        let mut current_cost = max_mean_completion(&current, num_agents);
        let mut best_cost = current_cost;

        let mut no_improve = 0u64;
        let mut temperature = self.params.initial_temperature;

        for _ in 0..self.params.max_iter {
            let mut candidate = current.clone();
            if !apply_random_move(&mut candidate, problem, &mut rng) {
                continue;
            }
            if !is_feasible(&candidate, problem) {
                continue;
            }

            let cost = max_mean_completion(&candidate, num_agents);
            let delta = cost - current_cost;

            // Metropolis rule: the uniform draw happens only for
            // non-improving candidates, and a draw equal to the threshold
            // rejects.
            if delta < 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
                current = candidate;
                current_cost = cost;
                if cost < best_cost {
                    best = current.clone();
                    best_cost = cost;
                    no_improve = 0;
                } else {
                    no_improve += 1;
                }
            } else {
                no_improve += 1;
            }

            temperature *= self.params.cooling_rate;

            if no_improve >= self.params.candidate_moves {
                break;
            }
        }

        Ok(best)
    }
}
