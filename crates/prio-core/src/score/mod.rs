//! Scoring engine: component scores, weighted combination, batch ranking.
//!
//! # Overview
//!
//! ```text
//! &[TaskInput]
//!        ↓  positional id assignment
//! &[(TaskId, &TaskInput)]
//!        ↓  graph::cycle_members()        (once per batch)
//!        ↓  per-task component scores → weighted total → explanation
//! Vec<ScoredTask>  (stable-sorted descending by total)
//! ```
//!
//! Scoring is pure and single-pass: no shared mutable state, no I/O, safe
//! to run concurrently on independent batches. The scorer carries an
//! explicit reference date so urgency is reproducible under test.

pub mod components;
pub mod explain;

use chrono::{Local, NaiveDate};

use crate::graph::{DependencyGraph, cycle_members};
use crate::model::{CYCLE_WARNING, ScoreComponents, ScoredTask, TaskId, TaskInput};
use crate::strategy::StrategyWeights;

/// One task's computed score: weighted total, component breakdown, and the
/// explanation text. Total and components are rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskScore {
    pub score: f64,
    pub components: ScoreComponents,
    pub explanation: String,
}

/// Scores tasks under one strategy and reference date.
///
/// Construction resolves the strategy name to its weight vector once;
/// unknown names fall back to `smart_balance` while the requested name is
/// kept for echoing and for the one strategy-sensitive explanation rule.
#[derive(Debug, Clone)]
pub struct TaskScorer {
    strategy: String,
    weights: StrategyWeights,
    today: NaiveDate,
}

impl TaskScorer {
    /// Scorer for a named strategy, using the local calendar date.
    #[must_use]
    pub fn new(strategy: impl Into<String>) -> Self {
        let strategy = strategy.into();
        let weights = StrategyWeights::for_strategy(&strategy);
        Self {
            strategy,
            weights,
            today: Local::now().date_naive(),
        }
    }

    /// Scorer with an explicit weight vector, bypassing strategy lookup.
    #[must_use]
    pub fn with_weights(strategy: impl Into<String>, weights: StrategyWeights) -> Self {
        Self {
            strategy: strategy.into(),
            weights,
            today: Local::now().date_naive(),
        }
    }

    /// Override the date urgency is computed against. Used by tests and by
    /// callers replaying historical batches.
    #[must_use]
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The strategy name this scorer was built with.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// The resolved weight vector.
    #[must_use]
    pub const fn weights(&self) -> StrategyWeights {
        self.weights
    }

    /// Score a single task against the full batch.
    ///
    /// The dependency component needs the whole batch to count dependents;
    /// a task with no id counts as blocking nothing.
    #[must_use]
    pub fn score(&self, task: &TaskInput, all_tasks: &[TaskInput]) -> TaskScore {
        let dependencies = task.id.map_or_else(
            || components::dependency_count_score(0),
            |id| {
                components::dependency_score(
                    id,
                    all_tasks.iter().map(|t| t.dependencies.as_slice()),
                )
            },
        );
        let raw = ScoreComponents {
            urgency: components::urgency_score(task.due_date.as_deref(), self.today),
            importance: components::importance_score(task.importance),
            effort: components::effort_score(task.estimated_hours),
            dependencies,
        };
        self.finish(raw, task.due_date.as_deref())
    }

    /// Score, annotate, and rank a whole batch.
    ///
    /// Missing ids are assigned by input position before anything else, the
    /// cycle detector runs once over the full set, and the result is
    /// stable-sorted descending by total — ties keep input order. An empty
    /// batch returns an empty list without error.
    #[must_use]
    pub fn score_batch(&self, tasks: &[TaskInput]) -> Vec<ScoredTask> {
        let resolved = assign_ids(tasks);
        let graph = DependencyGraph::from_batch(
            resolved
                .iter()
                .map(|&(id, task)| (id, task.dependencies.as_slice())),
        );
        let cycle_ids = cycle_members(&graph);

        let mut scored: Vec<ScoredTask> = resolved
            .iter()
            .map(|&(id, task)| {
                let raw = ScoreComponents {
                    urgency: components::urgency_score(task.due_date.as_deref(), self.today),
                    importance: components::importance_score(task.importance),
                    effort: components::effort_score(task.estimated_hours),
                    dependencies: components::dependency_score(
                        id,
                        resolved.iter().map(|&(_, t)| t.dependencies.as_slice()),
                    ),
                };
                let TaskScore {
                    score,
                    components,
                    explanation,
                } = self.finish(raw, task.due_date.as_deref());

                ScoredTask {
                    id,
                    title: task.title.clone(),
                    due_date: task.due_date.clone(),
                    estimated_hours: task.estimated_hours,
                    importance: task.importance,
                    dependencies: task.dependencies.clone(),
                    priority_score: score,
                    score_components: components,
                    explanation,
                    warning: cycle_ids
                        .contains(&id)
                        .then(|| CYCLE_WARNING.to_string()),
                    rank: None,
                    suggestion_reason: None,
                }
            })
            .collect();

        // Stable sort: equal totals keep their relative input order.
        scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        scored
    }

    /// Top-N slice of the ranked batch, annotated with ranks starting at 1.
    #[must_use]
    pub fn top_suggestions(&self, tasks: &[TaskInput], count: usize) -> Vec<ScoredTask> {
        let mut top = self.score_batch(tasks);
        top.truncate(count);

        for (position, task) in top.iter_mut().enumerate() {
            let rank = position + 1;
            task.rank = Some(rank);
            task.suggestion_reason = Some(format!("Rank #{rank}: {}", task.explanation));
        }
        top
    }

    /// Combine raw components into the rounded total + explanation.
    ///
    /// No normalization: weights that do not sum to 1 produce totals
    /// outside 0–100, by design.
    fn finish(&self, raw: ScoreComponents, due_date: Option<&str>) -> TaskScore {
        let total = raw.urgency * self.weights.urgency
            + raw.importance * self.weights.importance
            + raw.effort * self.weights.effort
            + raw.dependencies * self.weights.dependencies;

        let explanation = explain::explanation(&raw, due_date, self.today, &self.strategy);

        TaskScore {
            score: round2(total),
            components: ScoreComponents {
                urgency: round2(raw.urgency),
                importance: round2(raw.importance),
                effort: round2(raw.effort),
                dependencies: round2(raw.dependencies),
            },
            explanation,
        }
    }
}

/// Resolve every task's identifier: explicit id if present, else the
/// zero-based input position.
fn assign_ids(tasks: &[TaskInput]) -> Vec<(TaskId, &TaskInput)> {
    let mut position: TaskId = 0;
    tasks
        .iter()
        .map(|task| {
            let id = task.id.unwrap_or(position);
            position += 1;
            (id, task)
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
