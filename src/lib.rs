//! Deadline-aware weekly study planner.
//!
//! Turns a list of study subjects (difficulty + deadline) and a daily
//! hour budget into a 7-day timetable: heterogeneous subject
//! attributes are normalized into priority weights, the budget is
//! split proportionally, and the result is projected into
//! priority-ordered daily sessions with deterministic tie-breaking.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Difficulty`,
//!   `StudyPreferences`, `StudyLoad`, `Timetable`, `PlanOutcome`
//! - **`validation`**: Raw-request extraction and integrity checks
//! - **`clock`**: Days-until-deadline, floored at 1
//! - **`scoring`**: Difficulty-weighted, urgency-boosted priority weights
//! - **`allocator`**: Proportional daily/weekly hour allocation
//! - **`builder`**: 7-day timetable projection
//! - **`planner`**: Orchestration, `Planner`/`Annotator` trait seams
//!
//! # Architecture
//!
//! The pipeline is a pure function of `(request, today)` with a single
//! error boundary: any stage failure becomes a `{success: false}`
//! envelope, never a partial result and never a panic. "Now" is
//! captured once per request so all subjects score against the same
//! reference date; concurrent requests share no state.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use study_planner::build_study_plan_at;
//! use serde_json::json;
//!
//! let input = json!({
//!     "subjects": [
//!         {"name": "Math", "difficulty": "hard", "deadline": "2025-12-20"},
//!         {"name": "History", "difficulty": "easy", "deadline": "2026-01-10"}
//!     ],
//!     "available_hours_per_day": 6
//! });
//!
//! let today = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
//! let outcome = build_study_plan_at(&input, today);
//! let plan = outcome.plan().unwrap();
//! assert_eq!(plan.timetable.weekly_schedule.days().len(), 7);
//! ```

pub mod allocator;
pub mod builder;
pub mod clock;
pub mod error;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod validation;

pub use error::{PlanError, Result};
pub use models::{
    Difficulty, LoadEntry, PlanMetadata, PlanOutcome, PlanRequest, PriorityRecord, Session,
    SessionSummary, StudyLoad, StudyPlan, StudyPreferences, Subject, Timetable, WeeklySchedule,
};
pub use planner::{
    build_study_plan, build_study_plan_at, Annotator, Insight, PlanService, Planner,
    ServiceResponse, StubAnnotator, WeeklyPlanner,
};
