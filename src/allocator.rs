//! Proportional hour allocation.
//!
//! # Algorithm
//!
//! 1. Sum every subject's priority weight into a total.
//! 2. Each subject receives `(weight / total) * daily_hours`, rounded
//!    to one decimal place.
//! 3. Weekly hours multiply the *rounded* daily value by 7 and round
//!    again. The compounded rounding is part of the output contract
//!    and must not be reordered.
//!
//! Entry order equals input order; the timetable builder relies on it
//! for deterministic tie-breaking.

use crate::error::{PlanError, Result};
use crate::models::{LoadEntry, PriorityRecord, StudyLoad};

/// Rounds to one decimal place.
#[inline]
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Rounds to two decimal places.
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Distributes the daily hour budget across subjects in proportion to
/// their priority weights.
///
/// Fails with [`PlanError::EmptySubjectList`] when the total weight is
/// zero, which only happens for an empty record list (every individual
/// weight is strictly positive).
pub fn allocate(records: &[PriorityRecord], daily_hours: f64) -> Result<StudyLoad> {
    let total_weight: f64 = records.iter().map(|r| r.weight).sum();
    if total_weight <= 0.0 {
        return Err(PlanError::EmptySubjectList);
    }

    let mut load = StudyLoad::new();
    for record in records {
        let hours_per_day = round1((record.weight / total_weight) * daily_hours);
        load.push(LoadEntry {
            name: record.name.clone(),
            hours_per_day,
            days_until_deadline: record.days_left,
            total_hours_weekly: round1(hours_per_day * 7.0),
            difficulty: record.difficulty,
            priority_score: round2(record.weight),
        });
    }

    Ok(load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use proptest::prelude::*;

    fn record(name: &str, weight: f64, days_left: i64) -> PriorityRecord {
        PriorityRecord {
            name: name.to_string(),
            weight,
            days_left,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_single_subject_gets_full_budget() {
        let load = allocate(&[record("Review", 11.0, 3)], 2.0).unwrap();
        let entry = load.get("Review").unwrap();
        assert_eq!(entry.hours_per_day, 2.0);
        assert_eq!(entry.total_hours_weekly, 14.0);
        assert_eq!(entry.days_until_deadline, 3);
    }

    #[test]
    fn test_proportional_split() {
        // Weights 6 and 2 over 8 hours: 6.0 and 2.0 per day.
        let load = allocate(&[record("Math", 6.0, 5), record("History", 2.0, 20)], 8.0).unwrap();
        assert_eq!(load.get("Math").unwrap().hours_per_day, 6.0);
        assert_eq!(load.get("History").unwrap().hours_per_day, 2.0);
    }

    #[test]
    fn test_heavier_weight_gets_more_hours() {
        let load = allocate(
            &[
                record("Math", 6.0, 5),
                record("Physics", 3.0, 20),
                record("Chemistry", 1.25, 40),
            ],
            6.0,
        )
        .unwrap();

        let math = load.get("Math").unwrap().hours_per_day;
        let physics = load.get("Physics").unwrap().hours_per_day;
        let chemistry = load.get("Chemistry").unwrap().hours_per_day;
        assert!(math > physics && physics > chemistry);
        assert!((load.total_daily_hours() - 6.0).abs() <= 0.1 + 1e-9);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let err = allocate(&[], 6.0).unwrap_err();
        assert!(matches!(err, PlanError::EmptySubjectList));
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // Equal thirds of 1 hour: 0.333... rounds to 0.3.
        let load = allocate(
            &[record("A", 1.0, 10), record("B", 1.0, 10), record("C", 1.0, 10)],
            1.0,
        )
        .unwrap();
        assert_eq!(load.get("A").unwrap().hours_per_day, 0.3);
        // Weekly multiplies the rounded daily value: 0.3 * 7 = 2.1,
        // not round1(0.333 * 7) = 2.3.
        assert_eq!(load.get("A").unwrap().total_hours_weekly, 2.1);
    }

    #[test]
    fn test_priority_score_rounded_two_decimals() {
        let load = allocate(&[record("Math", 2.6666666, 5)], 4.0).unwrap();
        assert_eq!(load.get("Math").unwrap().priority_score, 2.67);
    }

    #[test]
    fn test_output_order_is_input_order() {
        let load = allocate(
            &[record("Low", 1.0, 30), record("High", 9.0, 1)],
            5.0,
        )
        .unwrap();
        let names: Vec<&str> = load.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "High"]);
    }

    proptest! {
        /// Daily hours are conserved within one-decimal rounding
        /// tolerance per subject.
        #[test]
        fn prop_hours_conserved(
            weights in prop::collection::vec(0.1f64..50.0, 1..12),
            daily_hours in 0.5f64..16.0,
        ) {
            let records: Vec<PriorityRecord> = weights
                .iter()
                .enumerate()
                .map(|(i, &w)| record(&format!("S{i}"), w, 5))
                .collect();

            let load = allocate(&records, daily_hours).unwrap();
            let sum = load.total_daily_hours();
            // Each entry rounds by at most 0.05.
            let tolerance = 0.05 * records.len() as f64 + 1e-9;
            prop_assert!((sum - daily_hours).abs() <= tolerance);
        }

        /// Every subject receives a non-negative allocation.
        #[test]
        fn prop_no_negative_hours(
            weights in prop::collection::vec(0.1f64..50.0, 1..12),
        ) {
            let records: Vec<PriorityRecord> = weights
                .iter()
                .enumerate()
                .map(|(i, &w)| record(&format!("S{i}"), w, 5))
                .collect();

            let load = allocate(&records, 6.0).unwrap();
            prop_assert!(load.entries().iter().all(|e| e.hours_per_day >= 0.0));
        }
    }
}
