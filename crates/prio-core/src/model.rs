//! Task shapes consumed and produced by the scoring engine.
//!
//! All inputs are caller-owned and treated as immutable: scoring produces
//! fresh [`ScoredTask`] records and never writes back into a [`TaskInput`].
//! Every shape here is ephemeral — it lives for the duration of one scoring
//! call and is never persisted by the engine.

use serde::{Deserialize, Serialize};

/// Identifier for a task within one scoring batch.
///
/// Callers may supply their own ids; tasks without one are assigned their
/// zero-based input position before any scoring runs.
pub type TaskId = i64;

/// Warning attached to tasks that participate in a dependency cycle.
pub const CYCLE_WARNING: &str = "Circular dependency detected";

/// A task as supplied by the caller.
///
/// Field-level leniency is deliberate: a missing or malformed value never
/// fails the batch, it resolves to a documented neutral default in the
/// component score functions. The due date stays a raw string so an
/// unparseable value degrades to the default instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Caller-supplied identifier. Must be unique within a batch if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Display title. Not used by any score component.
    pub title: String,
    /// Due date in ISO-8601 `YYYY-MM-DD` form.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Estimated effort in hours.
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Importance rating on a 1–10 scale.
    #[serde(default)]
    pub importance: Option<i64>,
    /// Ids of tasks this task depends on. Unknown ids are tolerated.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

/// The four component scores that feed the weighted total.
///
/// Each component is reported on its own 0–100 scale (urgency saturates at
/// 100 for overdue tasks). Values here are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

/// A task with its computed priority attached.
///
/// `rank` and `suggestion_reason` are populated only by the top-N
/// suggestion path; `warning` only when the task sits on a dependency
/// cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    /// Resolved identifier (caller-supplied or positional).
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,
    pub dependencies: Vec<TaskId>,
    /// Weighted total, rounded to two decimal places.
    pub priority_score: f64,
    pub score_components: ScoreComponents,
    /// Human-readable reasons behind the score, joined with " • ".
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_reason: Option<String>,
}
