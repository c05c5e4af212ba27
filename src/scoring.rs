//! Priority scoring.
//!
//! Combines a subject's difficulty weight with a deadline-derived
//! urgency factor into a single positive priority weight. The weight
//! drives proportional hour allocation, so the exact formula is part
//! of the output contract.
//!
//! # Score Convention
//! Higher weight = more study hours. Urgency dominates: the ×10 boost
//! lets an easy subject due tomorrow (weight 1.0 × 11 = 11) outrank a
//! hard subject due in 30 days (weight ≈ 2.0 × 1.33 ≈ 2.7).

use chrono::NaiveDate;

use crate::clock::days_until;
use crate::models::{PriorityRecord, Subject};

/// Multiplier applied to the urgency factor. Fixed by the output
/// contract; changing it changes every allocation.
pub const URGENCY_BOOST: f64 = 10.0;

/// Urgency factor for a deadline: `1 / days_left`.
///
/// `days_left` is guaranteed ≥ 1 by the deadline clock.
#[inline]
pub fn urgency_factor(days_left: i64) -> f64 {
    1.0 / days_left.max(1) as f64
}

/// Combined priority weight: `difficulty_weight * (1 + urgency * 10)`.
#[inline]
pub fn priority_weight(difficulty_weight: f64, days_left: i64) -> f64 {
    difficulty_weight * (1.0 + urgency_factor(days_left) * URGENCY_BOOST)
}

/// Scores every subject against a single shared reference date.
///
/// All subjects in one request see the same `today`, keeping their
/// weights mutually comparable. Output order equals input order.
pub fn score_subjects(subjects: &[Subject], today: NaiveDate) -> Vec<PriorityRecord> {
    subjects
        .iter()
        .map(|subject| {
            let days_left = days_until(subject.deadline, today);
            PriorityRecord {
                name: subject.name.clone(),
                weight: priority_weight(subject.difficulty.weight(), days_left),
                days_left,
                difficulty: subject.difficulty,
            }
        })
        .collect()
}
