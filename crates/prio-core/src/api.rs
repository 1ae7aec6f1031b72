//! The two operations consumed by the external request layer.
//!
//! Request validation beyond what scoring itself requires (field bounds,
//! transport shape) belongs to the caller; the only rejection here is an
//! empty batch. Both operations are pure per call — no retries, no state.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::EngineError;
use crate::model::{ScoredTask, TaskInput};
use crate::score::TaskScorer;
use crate::strategy::{DEFAULT_STRATEGY, StrategyWeights};

/// Suggestions returned when the caller does not say how many.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Request to score and rank a task batch.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub tasks: Vec<TaskInput>,
    /// Strategy name; unknown names fall back to `smart_balance`.
    #[serde(default)]
    pub strategy: Option<String>,
    /// Custom weight vector. Replaces strategy lookup entirely.
    #[serde(default)]
    pub custom_weights: Option<StrategyWeights>,
}

/// Ranked batch with the strategy echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub tasks: Vec<ScoredTask>,
    pub strategy: String,
    pub total_tasks: usize,
}

/// Request for the top-N suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestRequest {
    pub tasks: Vec<TaskInput>,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub custom_weights: Option<StrategyWeights>,
    /// Defaults to [`DEFAULT_SUGGESTION_COUNT`]. The engine itself enforces
    /// no bounds; that is the request layer's call.
    #[serde(default)]
    pub count: Option<usize>,
}

/// Top-N suggestions with ranks attached.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<ScoredTask>,
    pub strategy: String,
    pub requested_count: usize,
    pub returned_count: usize,
}

/// Score every task and return the batch ranked by priority.
///
/// # Errors
///
/// [`EngineError::NoTasks`] when the batch is empty.
#[instrument(skip(req), fields(task_count = req.tasks.len()))]
pub fn analyze(req: &AnalyzeRequest) -> Result<AnalyzeResponse, EngineError> {
    if req.tasks.is_empty() {
        return Err(EngineError::NoTasks);
    }

    let scorer = scorer_for(req.strategy.as_deref(), req.custom_weights);
    let tasks = scorer.score_batch(&req.tasks);
    info!(total = tasks.len(), strategy = scorer.strategy(), "scored batch");

    Ok(AnalyzeResponse {
        strategy: scorer.strategy().to_string(),
        total_tasks: tasks.len(),
        tasks,
    })
}

/// Return the top-N tasks to work on, with rank annotations.
///
/// # Errors
///
/// [`EngineError::NoTasks`] when the batch is empty.
#[instrument(skip(req), fields(task_count = req.tasks.len()))]
pub fn suggest(req: &SuggestRequest) -> Result<SuggestResponse, EngineError> {
    if req.tasks.is_empty() {
        return Err(EngineError::NoTasks);
    }

    let count = req.count.unwrap_or(DEFAULT_SUGGESTION_COUNT);
    let scorer = scorer_for(req.strategy.as_deref(), req.custom_weights);
    let suggestions = scorer.top_suggestions(&req.tasks, count);
    info!(
        requested = count,
        returned = suggestions.len(),
        strategy = scorer.strategy(),
        "built suggestions"
    );

    Ok(SuggestResponse {
        strategy: scorer.strategy().to_string(),
        requested_count: count,
        returned_count: suggestions.len(),
        suggestions,
    })
}

fn scorer_for(strategy: Option<&str>, custom_weights: Option<StrategyWeights>) -> TaskScorer {
    let name = strategy.unwrap_or(DEFAULT_STRATEGY);
    custom_weights.map_or_else(
        || TaskScorer::new(name),
        |weights| TaskScorer::with_weights(name, weights),
    )
}
