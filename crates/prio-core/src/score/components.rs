//! The four pure component score functions.
//!
//! Each maps one task attribute to its own 0–100 scale (urgency saturates
//! at 100 for overdue tasks). Malformed or missing values never error:
//! every function has an explicit guard returning a documented neutral
//! default, so a task with garbled fields still gets scored.

// Day counts, hour estimates, and ratings sit far below f64's 2^53 exact
// integer range.
#![allow(clippy::cast_precision_loss)]

use chrono::NaiveDate;

use crate::model::TaskId;

/// Neutral score substituted for missing or malformed field values.
pub const DEFAULT_SCORE: f64 = 50.0;

/// Rating assumed when a task carries no importance field.
pub const DEFAULT_IMPORTANCE: i64 = 5;

/// Effort assumed when a task carries no estimate, in hours.
pub const DEFAULT_HOURS: f64 = 1.0;

/// Parse an ISO-8601 `YYYY-MM-DD` due date.
pub(crate) fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Urgency from days until due, relative to `today`.
///
/// Tiered: 95 on the due day, ramping down through 10 as the deadline
/// recedes, saturating at 100 for anything overdue. Missing or unparseable
/// dates score [`DEFAULT_SCORE`].
#[must_use]
pub fn urgency_score(due_date: Option<&str>, today: NaiveDate) -> f64 {
    let Some(due) = due_date.and_then(parse_due_date) else {
        return DEFAULT_SCORE;
    };
    days_until_due_score((due - today).num_days())
}

fn days_until_due_score(days: i64) -> f64 {
    if days < 0 {
        // The 2-points-per-overdue-day ramp starts above the cap, so any
        // overdue task saturates immediately. Kept literal on purpose.
        return (100.0 + 2.0 * days.unsigned_abs() as f64).min(100.0);
    }
    if days == 0 {
        return 95.0;
    }
    let d = days as f64;
    if days <= 3 {
        90.0 - 3.0 * d
    } else if days <= 7 {
        80.0 - 5.0 * (d - 3.0)
    } else if days <= 14 {
        60.0 - 3.0 * (d - 7.0)
    } else if days <= 30 {
        40.0 - 1.25 * (d - 14.0)
    } else {
        // Asymptotic approach to the floor.
        (20.0 - (d - 29.0).log2()).max(10.0)
    }
}

/// Importance rating (1–10) on a 0–100 scale.
///
/// Exponential emphasis on high ratings: `rating^1.5 / 10^1.5 * 100`.
/// Out-of-range ratings score [`DEFAULT_SCORE`]; a missing rating is
/// treated as [`DEFAULT_IMPORTANCE`].
#[must_use]
pub fn importance_score(rating: Option<i64>) -> f64 {
    let rating = rating.unwrap_or(DEFAULT_IMPORTANCE);
    if !(1..=10).contains(&rating) {
        return DEFAULT_SCORE;
    }
    (rating as f64).powf(1.5) / 10f64.powf(1.5) * 100.0
}

/// Effort on a 0–100 scale, inverse to estimated hours — low effort scores
/// high ("quick wins").
///
/// Non-positive or non-finite estimates score [`DEFAULT_SCORE`]; a missing
/// estimate is treated as [`DEFAULT_HOURS`].
#[must_use]
pub fn effort_score(estimated_hours: Option<f64>) -> f64 {
    let h = estimated_hours.unwrap_or(DEFAULT_HOURS);
    if !h.is_finite() || h <= 0.0 {
        return DEFAULT_SCORE;
    }

    if h < 1.0 {
        100.0 - 5.0 * h
    } else if h <= 3.0 {
        95.0 - 7.5 * (h - 1.0)
    } else if h <= 8.0 {
        80.0 - 6.0 * (h - 3.0)
    } else if h <= 16.0 {
        50.0 - 2.5 * (h - 8.0)
    } else {
        (30.0 - 5.0 * (h - 15.0).log2()).max(10.0)
    }
}

/// Dependency weight from how many other tasks list `task_id` as a
/// dependency. Blocking tasks should be cleared first.
#[must_use]
pub fn dependency_score<'a>(
    task_id: TaskId,
    all_dependencies: impl IntoIterator<Item = &'a [TaskId]>,
) -> f64 {
    let blocking = all_dependencies
        .into_iter()
        .filter(|deps| deps.contains(&task_id))
        .count();
    dependency_count_score(blocking)
}

/// Dependency weight from a pre-computed dependent count.
#[must_use]
pub fn dependency_count_score(blocking: usize) -> f64 {
    match blocking {
        0 => 30.0,
        1 => 60.0,
        2 => 80.0,
        n => (80.0 + 10.0 * (n as f64 - 2.0)).min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn today() -> NaiveDate {
        date(2026, 8, 23)
    }

    fn urgency_at(days_offset: i64) -> f64 {
        let due = today() + chrono::Duration::days(days_offset);
        urgency_score(Some(&due.format("%Y-%m-%d").to_string()), today())
    }

    // -----------------------------------------------------------------------
    // Urgency
    // -----------------------------------------------------------------------

    #[test]
    fn urgency_due_today_is_exactly_95() {
        assert!((urgency_at(0) - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn urgency_overdue_saturates_at_100() {
        assert!((urgency_at(-1) - 100.0).abs() < f64::EPSILON);
        assert!((urgency_at(-90) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn urgency_tier_boundaries() {
        assert!((urgency_at(1) - 87.0).abs() < 1e-9);
        assert!((urgency_at(3) - 81.0).abs() < 1e-9);
        assert!((urgency_at(7) - 60.0).abs() < 1e-9);
        assert!((urgency_at(14) - 39.0).abs() < 1e-9);
        assert!((urgency_at(30) - 20.0).abs() < 1e-9);
        // d = 31: 20 - log2(2) = 19.
        assert!((urgency_at(31) - 19.0).abs() < 1e-9);
    }

    #[test]
    fn urgency_floors_at_10_far_out() {
        assert!((urgency_at(5000) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn urgency_missing_or_garbled_date_defaults_to_50() {
        assert!((urgency_score(None, today()) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((urgency_score(Some("not-a-date"), today()) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((urgency_score(Some("2026-13-99"), today()) - DEFAULT_SCORE).abs() < f64::EPSILON);
    }

    // -----------------------------------------------------------------------
    // Importance
    // -----------------------------------------------------------------------

    #[test]
    fn importance_ten_scores_100() {
        assert!((importance_score(Some(10)) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn importance_is_strictly_increasing() {
        for rating in 1..10 {
            assert!(
                importance_score(Some(rating + 1)) > importance_score(Some(rating)),
                "importance must grow from {rating} to {}",
                rating + 1
            );
        }
    }

    #[test]
    fn importance_out_of_range_defaults_to_50() {
        assert!((importance_score(Some(0)) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((importance_score(Some(11)) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((importance_score(Some(-3)) - DEFAULT_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn importance_missing_uses_middle_rating() {
        assert!((importance_score(None) - importance_score(Some(DEFAULT_IMPORTANCE))).abs() < f64::EPSILON);
    }

    // -----------------------------------------------------------------------
    // Effort
    // -----------------------------------------------------------------------

    #[test]
    fn effort_tier_values() {
        assert!((effort_score(Some(0.5)) - 97.5).abs() < 1e-9);
        assert!((effort_score(Some(1.0)) - 95.0).abs() < 1e-9);
        assert!((effort_score(Some(3.0)) - 80.0).abs() < 1e-9);
        assert!((effort_score(Some(8.0)) - 50.0).abs() < 1e-9);
        assert!((effort_score(Some(16.0)) - 30.0).abs() < 1e-9);
        // h = 17: 30 - 5*log2(2) = 25.
        assert!((effort_score(Some(17.0)) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn effort_floors_at_10_for_huge_estimates() {
        assert!((effort_score(Some(10_000.0)) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effort_invalid_defaults_to_50() {
        assert!((effort_score(Some(0.0)) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((effort_score(Some(-2.0)) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((effort_score(Some(f64::NAN)) - DEFAULT_SCORE).abs() < f64::EPSILON);
        assert!((effort_score(Some(f64::INFINITY)) - DEFAULT_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn effort_missing_assumes_one_hour() {
        assert!((effort_score(None) - 95.0).abs() < f64::EPSILON);
    }

    // -----------------------------------------------------------------------
    // Dependency weight
    // -----------------------------------------------------------------------

    #[test]
    fn dependency_count_tiers() {
        assert!((dependency_count_score(0) - 30.0).abs() < f64::EPSILON);
        assert!((dependency_count_score(1) - 60.0).abs() < f64::EPSILON);
        assert!((dependency_count_score(2) - 80.0).abs() < f64::EPSILON);
        assert!((dependency_count_score(3) - 90.0).abs() < f64::EPSILON);
        assert!((dependency_count_score(4) - 100.0).abs() < f64::EPSILON);
        assert!((dependency_count_score(40) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dependency_score_counts_dependents() {
        // Two tasks depend on 1, none on 2.
        let deps: [&[TaskId]; 3] = [&[], &[1], &[1]];
        assert!((dependency_score(1, deps) - 80.0).abs() < f64::EPSILON);
        assert!((dependency_score(2, deps) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dependency_score_ignores_unknown_targets() {
        let deps: [&[TaskId]; 2] = [&[99], &[99]];
        // 99 is not a batch task here, but counting is still permissive.
        assert!((dependency_score(99, deps) - 80.0).abs() < f64::EPSILON);
    }
}
