//! Request-layer validation.
//!
//! The engine degrades malformed field values to neutral default scores;
//! the CLI is stricter and rejects them up front so typos surface instead
//! of silently scoring 50. Unknown strategy names are deliberately NOT
//! rejected here — they pass through and fall back in the engine.

use anyhow::{Result, bail};
use prio_core::TaskInput;

const MIN_HOURS: f64 = 0.1;

pub fn validate_tasks(tasks: &[TaskInput]) -> Result<()> {
    for (position, task) in tasks.iter().enumerate() {
        if task.title.trim().is_empty() {
            bail!("task #{position}: title must not be empty");
        }
        if let Some(hours) = task.estimated_hours {
            if !hours.is_finite() || hours < MIN_HOURS {
                bail!("task #{position}: estimated_hours must be at least {MIN_HOURS}, got {hours}");
            }
        }
        if let Some(importance) = task.importance {
            if !(1..=10).contains(&importance) {
                bail!("task #{position}: importance must be between 1 and 10, got {importance}");
            }
        }
    }
    Ok(())
}

pub fn validate_count(count: Option<usize>) -> Result<()> {
    if count == Some(0) {
        bail!("count must be at least 1");
    }
    Ok(())
}
