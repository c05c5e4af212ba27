//! Deadline clock.
//!
//! Computes the whole-day distance from a reference date to a deadline.
//! Both sides are compared at date granularity, so a deadline later
//! today and a deadline tomorrow differ by exactly one day regardless
//! of wall-clock time.

use chrono::NaiveDate;

/// Days remaining until `deadline`, floored at 1.
///
/// The urgency factor downstream divides by this value, so it must
/// never be zero or negative: a deadline that is today or already past
/// yields 1 — maximum urgency, but finite weight.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days().max(1)
}
