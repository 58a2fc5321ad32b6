//! Greedy seed construction: topological largest-first fit.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::problem::Problem;
use crate::schedule::{Schedule, TaskRef};

use super::{SolveError, Solver};

/// Largest-first topological constructor.
///
/// Walks the slots in order, repeatedly placing the largest ready task that
/// still fits the slot's remaining capacity. A placed task releases its
/// successors into the ready set, so a whole chain may land in one slot in
/// dependency order. Ties break toward the smallest `(agent, task)` pair,
/// making construction reproducible.
///
/// Both search drivers start from this schedule; on its own it is the
/// fastest and weakest of the three solvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Solver for Greedy {
    fn solve(&self, problem: &Problem) -> Result<Schedule, SolveError> {
        feasible_seed(problem)
    }
}

/// Builds the greedy schedule and verifies it covers every task.
///
/// Greedy construction has no completeness guarantee; when tasks are left
/// over the caller gets [`SolveError::Incomplete`] instead of a partial
/// schedule.
pub(crate) fn feasible_seed(problem: &Problem) -> Result<Schedule, SolveError> {
    let schedule = construct(problem);
    let unplaced = schedule.unplaced(problem);
    if unplaced > 0 {
        return Err(SolveError::Incomplete {
            unplaced,
            total: problem.total_tasks(),
        });
    }
    Ok(schedule)
}

/// Raw construction; may leave tasks unscheduled when nothing fits.
fn construct(problem: &Problem) -> Schedule {
    let mut schedule = Schedule::with_slots(problem.num_slots());

    let mut ready: Vec<BTreeSet<usize>> = Vec::with_capacity(problem.num_agents());
    let mut remaining_indegree: Vec<Vec<usize>> = Vec::with_capacity(problem.num_agents());
    for dag in problem.dags() {
        let indegrees: Vec<usize> = (0..dag.len()).map(|task| dag.indegree(task)).collect();
        ready.push(
            (0..dag.len())
                .filter(|&task| indegrees[task] == 0)
                .collect(),
        );
        remaining_indegree.push(indegrees);
    }

    for slot in 0..problem.num_slots() {
        let mut remaining = problem.capacity(slot);
        loop {
            // Largest fitting ready task; ties toward the smallest (agent, task).
            let chosen = ready
                .iter()
                .enumerate()
                .flat_map(|(agent, tasks)| {
                    tasks
                        .iter()
                        .map(move |&task| (agent, task, problem.dag(agent).size(task)))
                })
                .filter(|&(_, _, size)| size <= remaining)
                .min_by_key(|&(agent, task, size)| (Reverse(size), agent, task));
            let Some((agent, task, size)) = chosen else {
                break;
            };

            schedule.push(slot, TaskRef::new(agent as u32, task as u32));
            remaining -= size;
            ready[agent].remove(&task);
            for successor in problem.dag(agent).successors(task) {
                remaining_indegree[agent][successor] -= 1;
                if remaining_indegree[agent][successor] == 0 {
                    ready[agent].insert(successor);
                }
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{is_feasible, max_mean_completion};
    use crate::test_utils::{benchmark_problem, tr, BENCHMARK_GREEDY_COST};

    fn problem(
        resources: Vec<u32>,
        agent_tasks: Vec<Vec<u32>>,
        dependencies: Vec<Vec<Vec<usize>>>,
    ) -> Problem {
        Problem::new(resources, agent_tasks, dependencies).unwrap()
    }

    #[test]
    fn single_slot_holds_both_tasks() {
        let p = problem(vec![3], vec![vec![1, 2]], vec![vec![vec![], vec![]]]);
        let s = Greedy.solve(&p).unwrap();

        // Largest-first places the size-2 task before the size-1 task.
        assert_eq!(s.slot(0), &[tr(0, 1), tr(0, 0)]);
        assert_eq!(max_mean_completion(&s, 1), 1.0);
    }

    #[test]
    fn dependency_forces_second_slot() {
        let p = problem(vec![2, 2], vec![vec![2, 2]], vec![vec![vec![], vec![0]]]);
        let s = Greedy.solve(&p).unwrap();

        assert_eq!(s.slot(0), &[tr(0, 0)]);
        assert_eq!(s.slot(1), &[tr(0, 1)]);
        assert_eq!(max_mean_completion(&s, 1), 1.5);
    }

    #[test]
    fn lexicographic_tie_break_fills_first_agent_first() {
        let p = problem(
            vec![2, 2],
            vec![vec![1, 1], vec![1, 1]],
            vec![vec![vec![], vec![]], vec![vec![], vec![]]],
        );
        let s = Greedy.solve(&p).unwrap();

        assert_eq!(s.slot(0), &[tr(0, 0), tr(0, 1)]);
        assert_eq!(s.slot(1), &[tr(1, 0), tr(1, 1)]);
        assert_eq!(max_mean_completion(&s, 2), 2.0);
    }

    #[test]
    fn released_chain_shares_one_slot() {
        let p = problem(
            vec![3, 3, 3],
            vec![vec![1, 1, 1]],
            vec![vec![vec![], vec![0], vec![1]]],
        );
        let s = Greedy.solve(&p).unwrap();

        assert_eq!(s.slot(0), &[tr(0, 0), tr(0, 1), tr(0, 2)]);
        assert!(is_feasible(&s, &p));
        assert_eq!(max_mean_completion(&s, 1), 1.0);
    }

    #[test]
    fn full_slot_pushes_equal_sized_task_onward() {
        let p = problem(
            vec![2, 2],
            vec![vec![2], vec![2]],
            vec![vec![vec![]], vec![vec![]]],
        );
        let s = Greedy.solve(&p).unwrap();

        assert_eq!(s.slot(0), &[tr(0, 0)]);
        assert_eq!(s.slot(1), &[tr(1, 0)]);
    }

    #[test]
    fn benchmark_instance_is_covered_and_feasible() {
        let p = benchmark_problem();
        let s = Greedy.solve(&p).unwrap();

        assert!(s.covers(&p));
        assert!(is_feasible(&s, &p));
        assert_eq!(
            max_mean_completion(&s, p.num_agents()),
            BENCHMARK_GREEDY_COST
        );
    }

    #[test]
    fn oversized_task_reported_as_incomplete() {
        let p = problem(vec![1, 1], vec![vec![2]], vec![vec![vec![]]]);
        assert_eq!(
            Greedy.solve(&p).unwrap_err(),
            SolveError::Incomplete {
                unplaced: 1,
                total: 1
            }
        );
    }

    #[test]
    fn zero_slots_with_tasks_reported_as_incomplete() {
        let p = problem(vec![], vec![vec![1]], vec![vec![vec![]]]);
        assert_eq!(
            Greedy.solve(&p).unwrap_err(),
            SolveError::Incomplete {
                unplaced: 1,
                total: 1
            }
        );
    }

    #[test]
    fn empty_instance_yields_empty_schedule() {
        let p = Problem::new(vec![2, 2], vec![], vec![]).unwrap();
        let s = Greedy.solve(&p).unwrap();
        assert_eq!(s.num_slots(), 2);
        assert!(s.is_empty());
    }
}
