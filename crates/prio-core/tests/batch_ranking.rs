//! End-to-end batch scoring behavior: ordering, stability, cycle warnings,
//! and suggestion annotations.

use chrono::NaiveDate;
use prio_core::{CYCLE_WARNING, TaskId, TaskInput, TaskScorer};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid test date")
}

fn scorer(strategy: &str) -> TaskScorer {
    TaskScorer::new(strategy).with_reference_date(today())
}

fn task(id: Option<TaskId>, title: &str) -> TaskInput {
    TaskInput {
        id,
        title: title.to_string(),
        due_date: None,
        estimated_hours: None,
        importance: None,
        dependencies: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn batch_orders_by_descending_total() {
    let mut hot = task(None, "hot");
    hot.due_date = Some("2026-08-23".to_string());
    hot.importance = Some(9);
    hot.estimated_hours = Some(0.5);

    let mut mild = task(None, "mild");
    mild.due_date = Some("2026-09-10".to_string());
    mild.importance = Some(5);
    mild.estimated_hours = Some(4.0);

    let mut cold = task(None, "cold");
    cold.due_date = Some("2027-08-01".to_string());
    cold.importance = Some(1);
    cold.estimated_hours = Some(40.0);

    let scored = scorer("smart_balance").score_batch(&[cold, hot, mild]);

    let titles: Vec<&str> = scored.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["hot", "mild", "cold"]);
    assert!(scored.windows(2).all(|w| w[0].priority_score >= w[1].priority_score));
}

#[test]
fn tied_scores_keep_relative_input_order() {
    // Identical attributes → identical totals. The sort must be stable.
    let tasks: Vec<TaskInput> = (0..6).map(|i| task(None, &format!("twin-{i}"))).collect();
    let scored = scorer("smart_balance").score_batch(&tasks);

    let titles: Vec<&str> = scored.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["twin-0", "twin-1", "twin-2", "twin-3", "twin-4", "twin-5"]
    );
}

#[test]
fn empty_batch_scores_to_empty_list() {
    assert!(scorer("smart_balance").score_batch(&[]).is_empty());
}

// ---------------------------------------------------------------------------
// Dependency weight and cycles
// ---------------------------------------------------------------------------

#[test]
fn blocking_tasks_outrank_equivalent_leaves() {
    let blocker = task(Some(1), "blocker");
    let mut dep_a = task(Some(2), "dep-a");
    dep_a.dependencies = vec![1];
    let mut dep_b = task(Some(3), "dep-b");
    dep_b.dependencies = vec![1];

    let scored = scorer("smart_balance").score_batch(&[dep_a, blocker, dep_b]);

    let blocker_entry = scored.iter().find(|t| t.id == 1).expect("blocker present");
    // Depended on by exactly two tasks → dependency component 80.
    assert!((blocker_entry.score_components.dependencies - 80.0).abs() < f64::EPSILON);
    assert_eq!(scored[0].id, 1, "the blocker should rank first");
}

#[test]
fn three_task_cycle_flags_every_member() {
    let mut a = task(Some(1), "a");
    a.dependencies = vec![2];
    let mut b = task(Some(2), "b");
    b.dependencies = vec![3];
    let mut c = task(Some(3), "c");
    c.dependencies = vec![1];
    let free = task(Some(4), "free");

    let scored = scorer("smart_balance").score_batch(&[a, b, c, free]);

    for t in &scored {
        if t.id == 4 {
            assert_eq!(t.warning, None, "acyclic task must carry no warning");
        } else {
            assert_eq!(t.warning.as_deref(), Some(CYCLE_WARNING), "task {} on cycle", t.id);
        }
    }
}

#[test]
fn linear_chain_carries_no_warnings() {
    let a = task(Some(1), "a");
    let mut b = task(Some(2), "b");
    b.dependencies = vec![1];
    let mut c = task(Some(3), "c");
    c.dependencies = vec![2];

    let scored = scorer("smart_balance").score_batch(&[a, b, c]);
    assert!(scored.iter().all(|t| t.warning.is_none()));
}

#[test]
fn unknown_dependency_ids_are_tolerated() {
    let mut t = task(Some(1), "dangling");
    t.dependencies = vec![41, 42, 43];

    let scored = scorer("smart_balance").score_batch(&[t]);
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].warning, None);
    assert!((scored[0].score_components.dependencies - 30.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn top_three_of_five_carry_sequential_ranks() {
    let tasks: Vec<TaskInput> = (0..5)
        .map(|i| {
            let mut t = task(None, &format!("t{i}"));
            t.importance = Some(i + 1);
            t
        })
        .collect();

    let top = scorer("smart_balance").top_suggestions(&tasks, 3);

    assert_eq!(top.len(), 3);
    for (i, t) in top.iter().enumerate() {
        let rank = i + 1;
        assert_eq!(t.rank, Some(rank));
        let reason = t.suggestion_reason.as_deref().expect("suggestion reason");
        assert!(
            reason.contains(&format!("#{rank}")),
            "reason {reason:?} must contain its rank"
        );
        assert!(reason.starts_with(&format!("Rank #{rank}: ")));
    }
    // Ranks follow the sorted order.
    assert!(top[0].priority_score >= top[1].priority_score);
    assert!(top[1].priority_score >= top[2].priority_score);
}

#[test]
fn suggestions_inherit_cycle_warnings() {
    let mut a = task(Some(1), "a");
    a.dependencies = vec![2];
    let mut b = task(Some(2), "b");
    b.dependencies = vec![1];

    let top = scorer("smart_balance").top_suggestions(&[a, b], 2);
    assert!(top.iter().all(|t| t.warning.as_deref() == Some(CYCLE_WARNING)));
}

// ---------------------------------------------------------------------------
// Explanations surfaced in batch results
// ---------------------------------------------------------------------------

#[test]
fn overdue_task_explains_itself() {
    let mut t = task(None, "late");
    t.due_date = Some("2026-08-19".to_string());

    let scored = scorer("smart_balance").score_batch(&[t]);
    assert!(
        scored[0].explanation.contains("OVERDUE by 4 days"),
        "got {:?}",
        scored[0].explanation
    );
    assert!((scored[0].score_components.urgency - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bare_task_explains_quick_win() {
    let scored = scorer("smart_balance").score_batch(&[task(None, "bare")]);
    // urgency 50, importance 35.36 (rating 5), effort 95 (1h) → effort
    // triggers the quick-win phrase.
    assert_eq!(scored[0].explanation, "Quick win (low effort)");
}
