#![forbid(unsafe_code)]
//! prio-core: deterministic task prioritization.
//!
//! # Overview
//!
//! Maps task attributes (due date, importance, estimated effort,
//! dependencies) to a composite priority score under a named strategy, and
//! flags tasks caught in dependency cycles.
//!
//! ```text
//! Vec<TaskInput> + strategy
//!        ↓  graph::DependencyGraph / graph::cycle_members   (once per batch)
//!        ↓  score::TaskScorer — four component scores → weighted total
//! Vec<ScoredTask>  (sorted descending, cycle warnings attached)
//!        ↓  api::analyze / api::suggest
//! response structs for the request layer
//! ```
//!
//! The engine is stateless and pure per call: inputs are never mutated, no
//! I/O happens, and independent batches can be scored concurrently without
//! coordination.
//!
//! # Conventions
//!
//! - **Errors**: typed [`EngineError`] for client-input rejections; field
//!   level problems degrade to documented default scores instead.
//! - **Logging**: `tracing` macros; operations are `#[instrument]`ed.

pub mod api;
pub mod error;
pub mod graph;
pub mod model;
pub mod score;
pub mod strategy;

pub use api::{
    AnalyzeRequest, AnalyzeResponse, DEFAULT_SUGGESTION_COUNT, SuggestRequest, SuggestResponse,
    analyze, suggest,
};
pub use error::EngineError;
pub use model::{CYCLE_WARNING, ScoreComponents, ScoredTask, TaskId, TaskInput};
pub use score::{TaskScore, TaskScorer};
pub use strategy::{DEFAULT_STRATEGY, StrategyWeights};
