//! Plan orchestration.
//!
//! Sequences extraction → scoring → allocation → timetable building
//! and wraps the whole pipeline in an all-or-nothing envelope. Two
//! trait seams keep the orchestrator replaceable:
//!
//! - [`Planner`]: the allocation pipeline itself ([`WeeklyPlanner`] is
//!   the built-in implementation).
//! - [`Annotator`]: an opaque insight generator merged into the
//!   combined response next to — and independent of — the plan.
//!
//! Stage progress is emitted as `tracing` events rather than written
//! to any output sink.

use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::allocator::allocate;
use crate::builder::build_timetable;
use crate::error::Result;
use crate::models::{
    PlanMetadata, PlanOutcome, PlanRequest, StudyPlan, PLANNING_PERIOD,
};
use crate::scoring::score_subjects;
use crate::validation::{extract_request, validate_request};

/// A planning pipeline: typed request in, complete plan out.
///
/// Implementations must be pure functions of `(request, today)`;
/// "today" is captured once per request by the caller so that every
/// subject is scored against the same reference date.
pub trait Planner: Send + Sync + Debug {
    /// Builds a complete study plan, or fails with the first violation.
    fn plan(&self, request: &PlanRequest, today: NaiveDate) -> Result<StudyPlan>;
}

/// The built-in weekly planner.
///
/// Validate → score → allocate → build timetable, in that order, with
/// no partial results.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyPlanner;

impl WeeklyPlanner {
    /// Creates a weekly planner.
    pub fn new() -> Self {
        Self
    }
}

impl Planner for WeeklyPlanner {
    fn plan(&self, request: &PlanRequest, today: NaiveDate) -> Result<StudyPlan> {
        validate_request(request)?;
        debug!(subjects = request.subjects.len(), %today, "request validated");

        let records = score_subjects(&request.subjects, today);
        debug!(records = records.len(), "priorities scored");

        let study_load = allocate(&records, request.available_hours_per_day)?;
        debug!(
            daily_hours = request.available_hours_per_day,
            "study load allocated"
        );

        let preferences = request.study_preferences.clone().normalized();
        let timetable = build_timetable(&study_load, &preferences);
        debug!("timetable built");

        Ok(StudyPlan {
            metadata: PlanMetadata {
                total_subjects: request.subjects.len(),
                planning_period: PLANNING_PERIOD,
                total_study_hours_daily: request.available_hours_per_day,
            },
            study_load,
            timetable,
        })
    }
}

/// Opaque insight generator run alongside the planner.
///
/// A placeholder dispatch point: the built-in [`StubAnnotator`] is
/// canned output, intended to be swapped for a real analysis backend
/// without touching the pipeline.
pub trait Annotator: Send + Sync + Debug {
    /// Produces an insight for a validated request.
    fn annotate(&self, request: &PlanRequest) -> Insight;
}

/// Opaque analysis object merged into the combined response.
///
/// The timetable output never depends on its content.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    /// Free-text analysis.
    pub analysis: String,
    /// Suggested actions.
    pub recommendations: Vec<String>,
    /// Overall difficulty assessment.
    pub difficulty: String,
}

/// Canned insight generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAnnotator;

impl Annotator for StubAnnotator {
    fn annotate(&self, request: &PlanRequest) -> Insight {
        Insight {
            analysis: format!("You have {} subjects to manage", request.subjects.len()),
            recommendations: vec!["Prioritize the closest deadlines".to_string()],
            difficulty: "medium".to_string(),
        }
    }
}

/// Builds a study plan from a raw JSON request.
///
/// Captures "now" exactly once; every subject in the request is scored
/// against the same date. Any error from any stage is converted here —
/// the single catch boundary — into a failure envelope. Never panics.
pub fn build_study_plan(input: &Value) -> PlanOutcome {
    build_study_plan_at(input, Utc::now().date_naive())
}

/// [`build_study_plan`] with an explicit reference date.
///
/// Deterministic; intended for tests and for callers that batch
/// requests against a frozen clock.
pub fn build_study_plan_at(input: &Value, today: NaiveDate) -> PlanOutcome {
    let result = extract_request(input).and_then(|request| WeeklyPlanner.plan(&request, today));
    if let Err(ref err) = result {
        warn!(error = %err, "planning failed");
    }
    result.into()
}

/// Combined response produced by [`PlanService`]: AI insights and the
/// study plan side by side, with a generation timestamp.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServiceResponse {
    /// Insights plus plan. `success` is always `true`.
    Success {
        success: bool,
        ai_insights: Insight,
        study_plan: StudyPlan,
        timestamp: String,
    },
    /// Raw error string. `success` is always `false`.
    Failure { success: bool, error: String },
}

impl ServiceResponse {
    /// Whether this response carries a plan.
    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResponse::Success { .. })
    }
}

/// Front service combining a [`Planner`] with an [`Annotator`].
///
/// Validates once, runs both collaborators against the same request,
/// and merges their outputs. The annotator cannot fail the plan and
/// the plan never reads the annotator's output.
#[derive(Debug, Clone, Default)]
pub struct PlanService<P = WeeklyPlanner, A = StubAnnotator> {
    planner: P,
    annotator: A,
}

impl PlanService {
    /// Creates a service with the built-in planner and stub annotator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Planner, A: Annotator> PlanService<P, A> {
    /// Creates a service from explicit collaborators.
    pub fn with_parts(planner: P, annotator: A) -> Self {
        Self { planner, annotator }
    }

    /// Processes a raw request, capturing "now" once.
    pub fn process(&self, input: &Value) -> ServiceResponse {
        self.process_at(input, Utc::now())
    }

    /// [`Self::process`] against a frozen clock.
    pub fn process_at(&self, input: &Value, now: DateTime<Utc>) -> ServiceResponse {
        let result = extract_request(input).and_then(|request| {
            let insights = self.annotator.annotate(&request);
            let plan = self.planner.plan(&request, now.date_naive())?;
            Ok((insights, plan))
        });

        match result {
            Ok((ai_insights, study_plan)) => ServiceResponse::Success {
                success: true,
                ai_insights,
                study_plan,
                timestamp: now.to_rfc3339(),
            },
            Err(err) => {
                warn!(error = %err, "request processing failed");
                ServiceResponse::Failure {
                    success: false,
                    error: err.to_string(),
                }
            }
        }
    }
}
