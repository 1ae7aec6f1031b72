//! Graph construction from a resolved task batch.
//!
//! Callers must resolve identifiers first (positional assignment for tasks
//! without an explicit id); the builder only sees `(id, dependencies)`
//! pairs.
//!
//! ## Unknown dependency ids
//!
//! A dependency referencing no task in the batch still becomes a node: a
//! dead end with no outgoing edges. Traversal walks through it without
//! error, and it can never appear in a cycle. This permissiveness is
//! deliberate — batches are not rejected for dangling references.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::TaskId;

/// Directed depends-on graph for one scoring batch.
///
/// Nodes are task ids. An edge `A → B` means "A depends on B".
#[derive(Debug)]
pub struct DependencyGraph {
    /// Directed graph: nodes = task ids, edges = depends-on relationships.
    pub graph: DiGraph<TaskId, ()>,
    /// Mapping from task id to petgraph `NodeIndex`.
    pub node_map: HashMap<TaskId, NodeIndex>,
    /// Nodes of real batch tasks in input order — the DFS roots.
    ///
    /// Nodes created only because a dependency referenced an unknown id are
    /// excluded here (they have no outgoing edges to explore anyway).
    pub task_nodes: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Build a [`DependencyGraph`] from `(id, dependencies)` pairs.
    ///
    /// All task nodes are added first, in input order, then one edge per
    /// dependency entry. Duplicate edges are collapsed; petgraph would
    /// otherwise keep both and the detector would walk the same edge twice.
    #[must_use]
    pub fn from_batch<'a>(batch: impl IntoIterator<Item = (TaskId, &'a [TaskId])>) -> Self {
        let batch: Vec<(TaskId, &[TaskId])> = batch.into_iter().collect();

        let mut graph = DiGraph::<TaskId, ()>::new();
        let mut node_map: HashMap<TaskId, NodeIndex> = HashMap::with_capacity(batch.len());
        let mut task_nodes: Vec<NodeIndex> = Vec::with_capacity(batch.len());

        for &(id, _) in &batch {
            let idx = *node_map.entry(id).or_insert_with(|| graph.add_node(id));
            task_nodes.push(idx);
        }

        for &(id, deps) in &batch {
            // Safe: every batch id was inserted above.
            let Some(&from) = node_map.get(&id) else {
                continue;
            };
            for &dep in deps {
                let to = *node_map.entry(dep).or_insert_with(|| graph.add_node(dep));
                if !graph.contains_edge(from, to) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self {
            graph,
            node_map,
            task_nodes,
        }
    }

    /// Number of nodes, including dead-end nodes for unknown dependencies.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct depends-on edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the node for a task id.
    #[must_use]
    pub fn node_index(&self, id: TaskId) -> Option<NodeIndex> {
        self.node_map.get(&id).copied()
    }

    /// Return the task id stored at a node.
    #[must_use]
    pub fn task_id(&self, idx: NodeIndex) -> Option<TaskId> {
        self.graph.node_weight(idx).copied()
    }
}
