use thiserror::Error;

/// Errors rejected at instance construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("task {task} of agent {agent} has size zero; sizes must be at least 1")]
    ZeroSizeTask { agent: usize, task: usize },

    #[error("task {task} of agent {agent} depends on out-of-range task {dep}")]
    DependencyOutOfRange { agent: usize, task: usize, dep: usize },

    #[error("task {task} of agent {agent} depends on itself")]
    SelfDependency { agent: usize, task: usize },

    #[error("dependency graph of agent {agent} contains a cycle")]
    CyclicDependencies { agent: usize },

    #[error("agent {agent} has no tasks")]
    EmptyAgent { agent: usize },

    #[error("{agents} agents but {dependency_lists} dependency lists")]
    MismatchedAgentCount { agents: usize, dependency_lists: usize },

    #[error("agent {agent} has {tasks} tasks but {entries} dependency entries")]
    MismatchedTaskCount { agent: usize, tasks: usize, entries: usize },
}
