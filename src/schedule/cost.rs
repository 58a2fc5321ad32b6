//! Objective evaluation: maximum over agents of the mean completion slot.

use super::Schedule;

/// Computes `max_k (mean 1-indexed completion slot of agent k)`.
///
/// This is the scalar the search drivers minimize. An agent with no
/// scheduled task evaluates to `+inf`; validated instances reject such
/// agents up front, so the infinity only marks a malformed schedule instead
/// of crashing the evaluation. With `num_agents == 0` the result is `0.0`.
pub fn max_mean_completion(schedule: &Schedule, num_agents: usize) -> f64 {
    if num_agents == 0 {
        return 0.0;
    }

    let mut sums = vec![0u64; num_agents];
    let mut counts = vec![0u64; num_agents];
    for (slot, entry) in schedule.assignments() {
        let agent = entry.agent as usize;
        if agent < num_agents {
            sums[agent] += slot as u64 + 1;
            counts[agent] += 1;
        }
    }

    sums.iter()
        .zip(&counts)
        .map(|(&sum, &count)| {
            if count == 0 {
                f64::INFINITY
            } else {
                sum as f64 / count as f64
            }
        })
        .fold(f64::NEG_INFINITY, f64::max)
}
