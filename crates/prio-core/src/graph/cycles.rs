//! Cycle detection over the depends-on graph.
//!
//! # Semantics
//!
//! Depth-first traversal from every unvisited task node, maintaining the
//! current path explicitly. An edge into a node already on the path is a
//! back-edge: every node from that node's first occurrence on the path
//! through the current node (inclusive) joins the result set. A global
//! visited set keeps already-cleared subgraphs from being re-explored under
//! later roots.
//!
//! The result is the de-duplicated set of all ids found on any cycle, not
//! an enumeration of distinct cycles. An empty or acyclic graph yields an
//! empty set; there are no error conditions.
//!
//! Uses iterative DFS with explicit frames so large batches carry no
//! recursion-depth risk.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::NodeIndex;

use crate::model::TaskId;

use super::build::DependencyGraph;

/// Ids of every task that participates in at least one dependency cycle.
#[must_use]
pub fn cycle_members(dg: &DependencyGraph) -> HashSet<TaskId> {
    let mut members: HashSet<NodeIndex> = HashSet::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();

    // Current DFS path, plus first-occurrence positions for O(1) back-edge
    // segment lookup.
    let mut path: Vec<NodeIndex> = Vec::new();
    let mut on_path: HashMap<NodeIndex, usize> = HashMap::new();

    // Each frame: (node, outgoing neighbors, next neighbor index).
    let mut frames: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();

    for &root in &dg.task_nodes {
        if !visited.insert(root) {
            continue;
        }
        on_path.insert(root, path.len());
        path.push(root);
        frames.push((root, neighbors_in_order(dg, root), 0));

        while let Some(frame) = frames.last_mut() {
            let current = frame.0;
            if let Some(&next) = frame.1.get(frame.2) {
                frame.2 += 1;

                if let Some(&pos) = on_path.get(&next) {
                    // Back-edge: the path from `next`'s first occurrence
                    // through `current` closes a cycle.
                    members.extend(path[pos..].iter().copied());
                } else if visited.insert(next) {
                    on_path.insert(next, path.len());
                    path.push(next);
                    frames.push((next, neighbors_in_order(dg, next), 0));
                }
            } else {
                frames.pop();
                path.pop();
                on_path.remove(&current);
            }
        }
    }

    members
        .into_iter()
        .filter_map(|idx| dg.task_id(idx))
        .collect()
}

/// Outgoing neighbors in dependency-declaration order.
///
/// petgraph iterates outgoing edges newest-first; edges were inserted in
/// declaration order, so reverse to restore it.
fn neighbors_in_order(dg: &DependencyGraph, node: NodeIndex) -> Vec<NodeIndex> {
    let mut neighbors: Vec<NodeIndex> = dg
        .graph
        .neighbors_directed(node, Direction::Outgoing)
        .collect();
    neighbors.reverse();
    neighbors
}
