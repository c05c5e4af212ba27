//! Study-planning domain models.
//!
//! Input types (`Subject`, `StudyPreferences`, `PlanRequest`), the
//! ephemeral scoring record (`PriorityRecord`), and the output types
//! (`StudyLoad`, `Timetable`, `PlanOutcome`). All output state is
//! request-scoped and immutable once produced.
//!
//! # Pipeline Mapping
//!
//! | Model | Produced by | Consumed by |
//! |-------|-------------|-------------|
//! | `PlanRequest` | extraction | scorer |
//! | `PriorityRecord` | scorer | allocator |
//! | `StudyLoad` | allocator | timetable builder |
//! | `Timetable` | timetable builder | envelope |
//! | `PlanOutcome` | orchestrator | caller |

mod load;
mod plan;
mod preferences;
mod subject;
mod timetable;

pub use load::{LoadEntry, PriorityRecord, StudyLoad};
pub use plan::{PlanMetadata, PlanOutcome, PlanRequest, StudyPlan, FAILURE_MESSAGE, PLANNING_PERIOD};
pub use preferences::{StudyPreferences, DEFAULT_BREAK_MINUTES, DEFAULT_TIME_SLOT};
pub use subject::{Difficulty, Subject};
pub use timetable::{
    DaySchedule, Session, SessionSummary, Timetable, WeeklySchedule, SESSIONS_PER_WEEK, WEEK_DAYS,
};
