//! Request extraction and validation.
//!
//! Turns a raw JSON request into a typed [`PlanRequest`], failing fast
//! on the first violation. Checks:
//! - Required top-level fields (`subjects`, `available_hours_per_day`)
//! - Per-subject structure (name, deadline, recognizable difficulty)
//! - Duplicate subject names (names key the study-load output)
//! - A strictly positive daily hour budget
//!
//! A *missing* difficulty defaults to medium; a present-but-invalid
//! one is a hard error. Preferences are read leniently with defaults,
//! mirroring the envelope-level tolerance of the original wire format.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{PlanError, Result};
use crate::models::{Difficulty, PlanRequest, StudyPreferences, Subject};

/// Date format accepted for deadlines.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extracts and validates a typed request from raw JSON.
pub fn extract_request(value: &Value) -> Result<PlanRequest> {
    let raw_subjects = value
        .get("subjects")
        .ok_or(PlanError::MissingField("subjects"))?;
    let raw_hours = value
        .get("available_hours_per_day")
        .ok_or(PlanError::MissingField("available_hours_per_day"))?;

    let raw_subjects = raw_subjects
        .as_array()
        .ok_or_else(|| PlanError::InvalidSubject("'subjects' must be an array".to_string()))?;

    let hours = raw_hours
        .as_f64()
        .ok_or(PlanError::InvalidHours(f64::NAN))?;
    check_hours(hours)?;

    let mut subjects = Vec::with_capacity(raw_subjects.len());
    for raw in raw_subjects {
        subjects.push(extract_subject(raw)?);
    }
    check_unique_names(&subjects)?;

    let preferences = value
        .get("study_preferences")
        .map(extract_preferences)
        .unwrap_or_default();

    Ok(PlanRequest {
        subjects,
        available_hours_per_day: hours,
        study_preferences: preferences,
    })
}

/// Validates a typed request built directly in Rust.
///
/// Applies the same structural checks as [`extract_request`] minus the
/// JSON shape concerns serde already guarantees.
pub fn validate_request(request: &PlanRequest) -> Result<()> {
    check_hours(request.available_hours_per_day)?;
    for subject in &request.subjects {
        if subject.name.is_empty() {
            return Err(PlanError::InvalidSubject(
                "subject name must not be empty".to_string(),
            ));
        }
    }
    check_unique_names(&request.subjects)
}

fn extract_subject(raw: &Value) -> Result<Subject> {
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| subject_error(raw))?;
    let deadline = raw
        .get("deadline")
        .and_then(Value::as_str)
        .ok_or_else(|| subject_error(raw))?;
    let deadline = NaiveDate::parse_from_str(deadline, DATE_FORMAT)?;

    let difficulty = match raw.get("difficulty") {
        None | Some(Value::Null) => Difficulty::default(),
        Some(Value::String(s)) => s.parse()?,
        Some(other) => return Err(PlanError::InvalidDifficulty(other.to_string())),
    };

    Ok(Subject {
        name: name.to_string(),
        deadline,
        difficulty,
    })
}

fn extract_preferences(raw: &Value) -> StudyPreferences {
    let preferred_times = raw
        .get("preferred_times")
        .and_then(Value::as_array)
        .map(|slots| {
            slots
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut preferences = StudyPreferences::new(preferred_times);
    if let Some(minutes) = raw.get("break_duration").and_then(Value::as_u64) {
        preferences.break_minutes = minutes as u32;
    }
    preferences
}

fn check_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(PlanError::InvalidHours(hours));
    }
    Ok(())
}

fn check_unique_names(subjects: &[Subject]) -> Result<()> {
    let mut seen = HashSet::new();
    for subject in subjects {
        if !seen.insert(subject.name.as_str()) {
            return Err(PlanError::InvalidSubject(format!(
                "duplicate subject name: {}",
                subject.name
            )));
        }
    }
    Ok(())
}

fn subject_error(raw: &Value) -> PlanError {
    PlanError::InvalidSubject(format!("subject missing required fields: {raw}"))
}
