//! Named strategy weight vectors for combining component scores.
//!
//! Strategies are process-wide constants, never mutable state. A
//! caller-supplied custom weight vector replaces strategy lookup entirely
//! rather than merging with it.
//!
//! Weights are deliberately not normalized: the four built-in vectors sum
//! to 1.0 so their combined scores land on the familiar 0–100 scale, but a
//! custom vector that sums to something else simply produces totals outside
//! that range.

use serde::{Deserialize, Serialize};

/// Strategy used when the caller names none, or names an unknown one.
pub const DEFAULT_STRATEGY: &str = "smart_balance";

/// Weight vector over the four component scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl StrategyWeights {
    /// Balanced default: nothing dominates.
    pub const SMART_BALANCE: Self = Self {
        urgency: 0.35,
        importance: 0.30,
        effort: 0.20,
        dependencies: 0.15,
    };

    /// Favors low-effort tasks — quick wins first.
    pub const FASTEST_WINS: Self = Self {
        urgency: 0.15,
        importance: 0.15,
        effort: 0.60,
        dependencies: 0.10,
    };

    /// Favors high importance ratings over everything else.
    pub const HIGH_IMPACT: Self = Self {
        urgency: 0.15,
        importance: 0.65,
        effort: 0.05,
        dependencies: 0.15,
    };

    /// Favors near (or past) due dates.
    pub const DEADLINE_DRIVEN: Self = Self {
        urgency: 0.70,
        importance: 0.15,
        effort: 0.05,
        dependencies: 0.10,
    };

    /// Resolve a strategy name to its weight vector.
    ///
    /// Unrecognized names silently fall back to [`Self::SMART_BALANCE`];
    /// rejecting unknown names, if desired, belongs to the request layer.
    #[must_use]
    pub fn for_strategy(name: &str) -> Self {
        match name {
            "fastest_wins" => Self::FASTEST_WINS,
            "high_impact" => Self::HIGH_IMPACT,
            "deadline_driven" => Self::DEADLINE_DRIVEN,
            _ => Self::SMART_BALANCE,
        }
    }

    /// The built-in strategies, paired with their names.
    #[must_use]
    pub const fn builtins() -> [(&'static str, Self); 4] {
        [
            ("smart_balance", Self::SMART_BALANCE),
            ("fastest_wins", Self::FASTEST_WINS),
            ("high_impact", Self::HIGH_IMPACT),
            ("deadline_driven", Self::DEADLINE_DRIVEN),
        ]
    }
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self::SMART_BALANCE
    }
}
