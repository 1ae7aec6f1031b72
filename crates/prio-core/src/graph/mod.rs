//! Dependency graph analysis for a task batch.
//!
//! # Overview
//!
//! One batch of tasks defines an implicit directed graph over task
//! identifiers. The graph is built once per scoring call and consumed by
//! the cycle detector; its result annotates every scored task.
//!
//! ```text
//! &[(TaskId, deps)]
//!        ↓  build::DependencyGraph::from_batch()
//! DependencyGraph (DiGraph, possibly cyclic)
//!        ↓  cycles::cycle_members()
//! HashSet<TaskId> (ids on at least one cycle)
//! ```
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A **depends on** B" — one edge per entry in A's
//! dependency list. Note this is the reverse of a blocking relation: the
//! dependency-weight score counts *incoming* edges.

pub mod build;
pub mod cycles;

pub use build::DependencyGraph;
pub use cycles::cycle_members;
