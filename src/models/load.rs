//! Study-load models.
//!
//! `PriorityRecord` is the ephemeral scoring result consumed by the
//! allocator; `StudyLoad` is the allocation output: one `LoadEntry`
//! per subject, keyed by subject name, in request order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Difficulty;

/// Scored subject, produced per request and discarded after allocation.
#[derive(Debug, Clone)]
pub struct PriorityRecord {
    /// Subject name.
    pub name: String,
    /// Unrounded priority weight (difficulty-weighted, urgency-boosted).
    pub weight: f64,
    /// Days until the deadline, floored at 1.
    pub days_left: i64,
    /// Difficulty level.
    pub difficulty: Difficulty,
}

/// Daily/weekly hour allocation for one subject.
#[derive(Debug, Clone, Serialize)]
pub struct LoadEntry {
    /// Subject name. Not serialized; the entry is keyed by name in the
    /// enclosing map.
    #[serde(skip)]
    pub name: String,
    /// Allocated hours per day, rounded to one decimal.
    pub hours_per_day: f64,
    /// Days until the deadline, floored at 1.
    pub days_until_deadline: i64,
    /// Weekly hours: the *rounded* daily value times 7, rounded again.
    pub total_hours_weekly: f64,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Priority weight rounded to two decimals.
    pub priority_score: f64,
}

/// Per-subject hour allocation, in request order.
///
/// Serializes as a JSON map `{subject_name: entry, ...}` preserving
/// insertion order. That order doubles as the deterministic fallback
/// ordering when the timetable builder breaks priority ties.
#[derive(Debug, Clone, Default)]
pub struct StudyLoad {
    entries: Vec<LoadEntry>,
}

impl StudyLoad {
    /// Creates an empty study load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, keeping insertion order.
    pub fn push(&mut self, entry: LoadEntry) {
        self.entries.push(entry);
    }

    /// Entries in request order.
    pub fn entries(&self) -> &[LoadEntry] {
        &self.entries
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subjects are allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a subject.
    pub fn get(&self, name: &str) -> Option<&LoadEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Sum of daily hours across all subjects.
    pub fn total_daily_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours_per_day).sum()
    }
}

impl Serialize for StudyLoad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}
