//! Competitive benchmarks for opening-hand odds.
//!
//! Grades a probability against the thresholds players commonly aim for,
//! e.g. an 85%+ chance to open a starter.

use serde::{Deserialize, Serialize};

/// Which statistic is being graded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Starter,
    HandTrap,
    Brick,
}

/// Coarse grade, best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatStatus {
    Optimal,
    Good,
    Risky,
    Critical,
}

/// A grade plus one line of advice. Serialize-only: advice is static text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub status: StatStatus,
    pub advice: &'static str,
}

impl Evaluation {
    const fn new(status: StatStatus, advice: &'static str) -> Self {
        Self { status, advice }
    }
}

/// Grade a percentage for the given statistic.
///
/// Higher is better for starters and hand traps; lower is better for bricks.
#[must_use]
pub fn evaluate_stat(kind: StatKind, probability: f64) -> Evaluation {
    use StatStatus::{Critical, Good, Optimal, Risky};

    match kind {
        StatKind::Starter => {
            if probability > 90.0 {
                Evaluation::new(Optimal, "Hyper-Consistent (Ceiling may be low).")
            } else if probability >= 85.0 {
                Evaluation::new(Optimal, "Optimal Competitive Standard.")
            } else if probability >= 75.0 {
                Evaluation::new(Good, "Decent (Standard).")
            } else {
                Evaluation::new(Critical, "Inconsistent. Add Starters.")
            }
        }
        StatKind::Brick => {
            if probability > 20.0 {
                Evaluation::new(Critical, "Critical Risk (1 in 5 games).")
            } else if probability >= 10.0 {
                Evaluation::new(Risky, "Moderate Risk.")
            } else {
                Evaluation::new(Optimal, "Clean.")
            }
        }
        StatKind::HandTrap => {
            if probability >= 80.0 {
                Evaluation::new(Optimal, "Strong Defense.")
            } else if probability >= 60.0 {
                Evaluation::new(Good, "Standard Defense.")
            } else if probability >= 40.0 {
                Evaluation::new(Risky, "Light Defense.")
            } else {
                Evaluation::new(Critical, "Vulnerable. Add Interaction.")
            }
        }
    }
}
