//! Study preferences.
//!
//! Time-of-day preferences and break duration supplied by the user.
//! Slot labels are opaque strings ("morning", "evening", ...) assigned
//! round-robin by the timetable builder.

use serde::{Deserialize, Serialize};

/// Default time slot when no preference is given.
pub const DEFAULT_TIME_SLOT: &str = "morning";

/// Default break between sessions (minutes).
pub const DEFAULT_BREAK_MINUTES: u32 = 15;

/// User time-of-day preferences for the generated timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPreferences {
    /// Ordered time-slot labels, cycled per day. Never empty after
    /// normalization.
    #[serde(default = "default_preferred_times")]
    pub preferred_times: Vec<String>,
    /// Break after each session, in minutes.
    #[serde(rename = "break_duration", default = "default_break_minutes")]
    pub break_minutes: u32,
}

fn default_preferred_times() -> Vec<String> {
    vec![DEFAULT_TIME_SLOT.to_string()]
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

impl Default for StudyPreferences {
    fn default() -> Self {
        Self {
            preferred_times: default_preferred_times(),
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl StudyPreferences {
    /// Creates preferences with the given time slots.
    pub fn new(preferred_times: Vec<String>) -> Self {
        Self {
            preferred_times,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
        .normalized()
    }

    /// Sets the break duration.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Replaces an empty slot list with the default.
    ///
    /// The builder indexes slots modulo the list length, so the list
    /// must never be empty.
    pub fn normalized(mut self) -> Self {
        if self.preferred_times.is_empty() {
            self.preferred_times = default_preferred_times();
        }
        self
    }
}
