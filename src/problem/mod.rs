//! Problem instances: slot capacities and per-agent task graphs.

mod dag;
mod error;

pub use dag::AgentDag;
pub use error::ProblemError;

use crate::schedule::TaskRef;

/// Immutable scheduling instance.
///
/// Holds the ordered slot capacities (`T = num_slots()`) and one
/// [`AgentDag`] per agent. Construction validates the whole input; a built
/// instance is never mutated and may be shared across solver calls.
#[derive(Debug, Clone)]
pub struct Problem {
    resources: Vec<u32>,
    dags: Vec<AgentDag>,
}

impl Problem {
    /// Validates and builds an instance.
    ///
    /// `agent_tasks[k]` lists agent `k`'s task sizes; `dependencies[k][i]`
    /// lists the tasks of agent `k` that must precede its task `i`.
    ///
    /// # Errors
    ///
    /// Rejects zero task sizes, out-of-range or self-referential
    /// dependencies, cyclic agent graphs, agents with no tasks, and shape
    /// mismatches between `agent_tasks` and `dependencies`.
    pub fn new(
        resources: Vec<u32>,
        agent_tasks: Vec<Vec<u32>>,
        dependencies: Vec<Vec<Vec<usize>>>,
    ) -> Result<Self, ProblemError> {
        if dependencies.len() != agent_tasks.len() {
            return Err(ProblemError::MismatchedAgentCount {
                agents: agent_tasks.len(),
                dependency_lists: dependencies.len(),
            });
        }

        let mut dags = Vec::with_capacity(agent_tasks.len());
        for (agent, (sizes, deps)) in agent_tasks.iter().zip(&dependencies).enumerate() {
            if sizes.is_empty() {
                return Err(ProblemError::EmptyAgent { agent });
            }
            if deps.len() != sizes.len() {
                return Err(ProblemError::MismatchedTaskCount {
                    agent,
                    tasks: sizes.len(),
                    entries: deps.len(),
                });
            }
            dags.push(AgentDag::build(agent, sizes, deps)?);
        }

        Ok(Self { resources, dags })
    }

    /// Number of time slots in the horizon.
    pub fn num_slots(&self) -> usize {
        self.resources.len()
    }

    pub fn num_agents(&self) -> usize {
        self.dags.len()
    }

    /// Slot capacities in slot order.
    pub fn resources(&self) -> &[u32] {
        &self.resources
    }

    /// Capacity of `slot`. Panics if `slot` is out of range.
    pub fn capacity(&self, slot: usize) -> u32 {
        self.resources[slot]
    }

    /// Task graph of `agent`. Panics if `agent` is out of range.
    pub fn dag(&self, agent: usize) -> &AgentDag {
        &self.dags[agent]
    }

    pub fn dags(&self) -> &[AgentDag] {
        &self.dags
    }

    /// Total task count across all agents.
    pub fn total_tasks(&self) -> usize {
        self.dags.iter().map(AgentDag::len).sum()
    }

    /// Size of the task `entry` refers to. Panics on an unknown reference.
    pub fn size_of(&self, entry: TaskRef) -> u32 {
        self.dags[entry.agent as usize].size(entry.task as usize)
    }
}
