//! Human-readable explanation strings for a scored task.
//!
//! Deterministic, ordered checks — first match wins within a category, all
//! matching categories are concatenated with [`SEPARATOR`]. Thresholds are
//! checked against the *unrounded* component scores so the reported reasons
//! always agree with the arithmetic that produced the total.

use chrono::NaiveDate;

use crate::model::ScoreComponents;

use super::components::parse_due_date;

/// Separator between explanation phrases.
pub const SEPARATOR: &str = " • ";

/// Build the explanation for one task from its raw component scores.
#[must_use]
pub fn explanation(
    components: &ScoreComponents,
    due_date: Option<&str>,
    today: NaiveDate,
    strategy: &str,
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if components.urgency > 80.0 {
        reasons.push(urgency_phrase(due_date, today));
    } else if components.urgency > 60.0 {
        reasons.push("Approaching deadline".to_string());
    }

    if components.importance > 75.0 {
        reasons.push("High importance rating".to_string());
    }

    if components.effort > 80.0 {
        reasons.push("Quick win (low effort)".to_string());
    } else if components.effort < 30.0 && strategy != "fastest_wins" {
        reasons.push("High effort task".to_string());
    }

    if components.dependencies > 60.0 {
        reasons.push("Blocks other tasks".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Balanced priority".to_string());
    }

    reasons.join(SEPARATOR)
}

/// Specific phrase for highly urgent tasks, recomputed from the due date.
///
/// Falls back to a generic phrase when the date cannot be re-parsed (the
/// urgency score may exceed 80 without a date only via custom inputs, but
/// the fallback keeps this path total).
fn urgency_phrase(due_date: Option<&str>, today: NaiveDate) -> String {
    let Some(due) = due_date.and_then(parse_due_date) else {
        return "High urgency".to_string();
    };
    let days = (due - today).num_days();
    if days < 0 {
        format!("OVERDUE by {} days", -days)
    } else if days == 0 {
        "Due TODAY".to_string()
    } else {
        format!("Due very soon ({days} days)")
    }
}
