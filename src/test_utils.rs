//! Shared fixtures for the crate's test suites.

use crate::problem::Problem;
use crate::schedule::{Schedule, TaskRef};

/// Shorthand task reference.
pub(crate) fn tr(agent: u32, task: u32) -> TaskRef {
    TaskRef::new(agent, task)
}

/// Ten-slot, seven-agent benchmark instance used across the driver tests.
///
/// Mixes long chains, diamonds, and independent tasks; the greedy
/// constructor covers it with cost `23/3` (agent 6 dominates).
pub(crate) fn benchmark_problem() -> Problem {
    let resources = vec![4, 5, 2, 7, 3, 10, 7, 8, 5, 10];
    let agent_tasks = vec![
        vec![5, 2, 1, 1, 1, 1, 2, 1],
        vec![1, 1],
        vec![2, 3, 1],
        vec![3, 1, 1],
        vec![1, 1, 1, 1, 1, 1],
        vec![2, 2],
        vec![2, 1, 3, 1, 1, 1],
    ];
    let dependencies = vec![
        vec![
            vec![],
            vec![0],
            vec![0],
            vec![1],
            vec![],
            vec![0, 1, 2],
            vec![5],
            vec![],
        ],
        vec![vec![], vec![]],
        vec![vec![], vec![0], vec![1]],
        vec![vec![], vec![0], vec![1]],
        vec![vec![], vec![0], vec![1], vec![2], vec![3], vec![4]],
        vec![vec![], vec![0]],
        vec![vec![], vec![], vec![0, 1], vec![], vec![], vec![2, 3, 4]],
    ];
    Problem::new(resources, agent_tasks, dependencies).unwrap()
}

/// Greedy cost of [`benchmark_problem`], verified by hand.
pub(crate) const BENCHMARK_GREEDY_COST: f64 = 23.0 / 3.0;

/// Sorted multiset of all placed entries, for coverage comparisons.
pub(crate) fn placement_multiset(schedule: &Schedule) -> Vec<TaskRef> {
    let mut entries: Vec<TaskRef> = schedule.assignments().map(|(_, e)| e).collect();
    entries.sort_unstable();
    entries
}
