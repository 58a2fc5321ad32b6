use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::error::ProblemError;

/// Directed acyclic task graph of a single agent.
///
/// Nodes are the agent's tasks, indexed `0..len()`, each weighted with its
/// integer size. An edge `u -> v` constrains `u` to be placed strictly
/// before `v` in `(slot, position within slot)` order.
///
/// # Invariants
///
/// - Node indices coincide with local task ids (nodes are added in task
///   order and never removed).
/// - The graph is acyclic; [`build`](Self::build) rejects violating input.
#[derive(Debug, Clone)]
pub struct AgentDag {
    graph: DiGraph<u32, ()>,
}

impl AgentDag {
    /// Builds the DAG for `agent` from task sizes and dependency lists.
    ///
    /// `dependencies[i]` lists the tasks that must precede task `i`.
    /// Duplicate dependency entries collapse to a single edge. Rejects zero
    /// sizes, out-of-range or self-referential dependencies, and cycles.
    pub(crate) fn build(
        agent: usize,
        sizes: &[u32],
        dependencies: &[Vec<usize>],
    ) -> Result<Self, ProblemError> {
        let edge_hint = dependencies.iter().map(Vec::len).sum();
        let mut graph = DiGraph::with_capacity(sizes.len(), edge_hint);

        for (task, &size) in sizes.iter().enumerate() {
            if size == 0 {
                return Err(ProblemError::ZeroSizeTask { agent, task });
            }
            graph.add_node(size);
        }

        for (task, deps) in dependencies.iter().enumerate() {
            for &dep in deps {
                if dep >= sizes.len() {
                    return Err(ProblemError::DependencyOutOfRange { agent, task, dep });
                }
                if dep == task {
                    return Err(ProblemError::SelfDependency { agent, task });
                }
                graph.update_edge(NodeIndex::new(dep), NodeIndex::new(task), ());
            }
        }

        if toposort(&graph, None).is_err() {
            return Err(ProblemError::CyclicDependencies { agent });
        }

        Ok(Self { graph })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Size of `task`. Panics if `task` is out of range.
    pub fn size(&self, task: usize) -> u32 {
        self.graph[NodeIndex::new(task)]
    }

    /// Number of unmet dependencies of `task` in the full graph.
    pub fn indegree(&self, task: usize) -> usize {
        self.graph
            .neighbors_directed(NodeIndex::new(task), Direction::Incoming)
            .count()
    }

    /// Tasks directly depending on `task`.
    pub fn successors(&self, task: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(task), Direction::Outgoing)
            .map(NodeIndex::index)
    }

    /// All precedence edges as `(before, after)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }
}
