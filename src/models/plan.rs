//! Plan request and result envelope.
//!
//! `PlanRequest` is the typed input container; `PlanOutcome` is the
//! all-or-nothing envelope every planning call resolves to — a full
//! plan on success, an error string plus a generic message on failure,
//! never a partial result.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{StudyLoad, StudyPreferences, Subject, Timetable};
use crate::error::PlanError;

/// Planning horizon reported in metadata. Multi-week planning is not
/// modeled.
pub const PLANNING_PERIOD: &str = "1 week";

/// Generic user-visible message attached to every failure envelope.
pub const FAILURE_MESSAGE: &str = "Failed to generate study plan";

/// Typed planning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Subjects competing for the daily budget. Names are unique.
    pub subjects: Vec<Subject>,
    /// Daily hour budget, strictly positive.
    pub available_hours_per_day: f64,
    /// Time-of-day preferences. Defaults apply when absent.
    #[serde(default)]
    pub study_preferences: StudyPreferences,
}

impl PlanRequest {
    /// Creates a request with default preferences.
    pub fn new(subjects: Vec<Subject>, available_hours_per_day: f64) -> Self {
        Self {
            subjects,
            available_hours_per_day,
            study_preferences: StudyPreferences::default(),
        }
    }

    /// Sets the study preferences.
    pub fn with_preferences(mut self, preferences: StudyPreferences) -> Self {
        self.study_preferences = preferences.normalized();
        self
    }
}

/// Request-level metadata echoed back with every successful plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanMetadata {
    /// Number of subjects planned.
    pub total_subjects: usize,
    /// Always [`PLANNING_PERIOD`].
    pub planning_period: &'static str,
    /// The daily hour budget the hours were allocated against.
    pub total_study_hours_daily: f64,
}

/// A complete study plan.
#[derive(Debug, Clone, Serialize)]
pub struct StudyPlan {
    /// Per-subject hour allocation, keyed by subject name.
    pub study_load: StudyLoad,
    /// Seven-day timetable plus weekly summaries.
    pub timetable: Timetable,
    /// Request metadata.
    pub metadata: PlanMetadata,
}

/// Success/failure envelope for one planning request.
///
/// Serializes to `{success: true, study_load, timetable, metadata}` or
/// `{success: false, error, message}`.
#[derive(Debug)]
pub enum PlanOutcome {
    /// The full plan.
    Success(StudyPlan),
    /// Raw error string plus a generic message.
    Failure {
        error: String,
        message: &'static str,
    },
}

impl PlanOutcome {
    /// Wraps a plan in a success envelope.
    pub fn success(plan: StudyPlan) -> Self {
        PlanOutcome::Success(plan)
    }

    /// Converts an error into a failure envelope.
    pub fn failure(error: &PlanError) -> Self {
        PlanOutcome::Failure {
            error: error.to_string(),
            message: FAILURE_MESSAGE,
        }
    }

    /// Whether this outcome carries a plan.
    pub fn is_success(&self) -> bool {
        matches!(self, PlanOutcome::Success(_))
    }

    /// The plan, if successful.
    pub fn plan(&self) -> Option<&StudyPlan> {
        match self {
            PlanOutcome::Success(plan) => Some(plan),
            PlanOutcome::Failure { .. } => None,
        }
    }
}

impl Serialize for PlanOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlanOutcome::Success(plan) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("study_load", &plan.study_load)?;
                map.serialize_entry("timetable", &plan.timetable)?;
                map.serialize_entry("metadata", &plan.metadata)?;
                map.end()
            }
            PlanOutcome::Failure { error, message } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

impl From<Result<StudyPlan, PlanError>> for PlanOutcome {
    fn from(result: Result<StudyPlan, PlanError>) -> Self {
        match result {
            Ok(plan) => PlanOutcome::success(plan),
            Err(err) => PlanOutcome::failure(&err),
        }
    }
}
