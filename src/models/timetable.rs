//! Timetable (output) model.
//!
//! A timetable projects the study load onto a fixed 7-day week:
//! per-day session lists ordered by descending priority, plus a
//! per-subject weekly summary that is independent of day ordering.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The seven fixed calendar days, Monday first.
///
/// Every schedule contains exactly these keys regardless of how many
/// subjects exist.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Sessions per subject per week. One session every day; rest days are
/// not modeled.
pub const SESSIONS_PER_WEEK: u32 = 7;

/// A single study session within a day.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Subject name.
    pub subject: String,
    /// Session length in hours (the subject's daily allocation).
    pub duration_hours: f64,
    /// Assigned time-of-day slot label.
    pub time_slot: String,
    /// Break after this session, in minutes.
    pub break_after_minutes: u32,
    /// Priority score the day ordering sorts by.
    pub priority: f64,
}

/// One day's ordered session list.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    /// Day name (one of [`WEEK_DAYS`]).
    pub day: &'static str,
    /// Sessions sorted by descending priority, ties in allocator order.
    pub sessions: Vec<Session>,
}

/// Weekly summary for one subject.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Subject name.
    pub subject: String,
    /// Weekly hour total from the study load.
    pub total_hours_weekly: f64,
    /// Always 7.
    pub sessions_per_week: u32,
    /// Equal to the daily allocation, since every day has one session.
    pub average_session_duration: f64,
}

/// Seven-day schedule, Monday through Sunday.
///
/// Serializes as a JSON map `{"Monday": [...], ...}` in calendar order.
#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day in calendar order.
    pub fn push(&mut self, day: DaySchedule) {
        self.days.push(day);
    }

    /// Days in calendar order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Looks up a day by name.
    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == name)
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(day.day, &day.sessions)?;
        }
        map.end()
    }
}

/// Complete weekly timetable.
#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    /// Day-by-day session lists.
    pub weekly_schedule: WeeklySchedule,
    /// Per-subject weekly summaries (unordered with respect to days).
    pub study_sessions: Vec<SessionSummary>,
}
