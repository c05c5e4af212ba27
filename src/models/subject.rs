//! Subject model.
//!
//! A subject is a unit of study competing for the daily hour budget.
//! Its difficulty and deadline together determine its priority weight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Difficulty level of a subject.
///
/// Carries a fixed base weight used by the priority scorer:
/// easy = 1.0, medium = 1.5, hard = 2.0. Parsing is case-insensitive;
/// an unrecognized value is a hard error, never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Base weight used in priority scoring.
    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// Lowercase label as it appears in request/response JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(PlanError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject to be planned.
///
/// Names are unique within a single request (enforced by validation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name, used as the key in the study-load output.
    pub name: String,
    /// Deadline date (`YYYY-MM-DD`).
    pub deadline: NaiveDate,
    /// Difficulty level. Defaults to medium when absent.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Subject {
    /// Creates a subject with the default (medium) difficulty.
    pub fn new(name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            deadline,
            difficulty: Difficulty::default(),
        }
    }

    /// Sets the difficulty level.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_weights() {
        assert_eq!(Difficulty::Easy.weight(), 1.0);
        assert_eq!(Difficulty::Medium.weight(), 1.5);
        assert_eq!(Difficulty::Hard.weight(), 2.0);
    }

    #[test]
    fn test_difficulty_parse_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_parse_invalid() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, PlanError::InvalidDifficulty(s) if s == "extreme"));
    }

    #[test]
    fn test_difficulty_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_subject_builder() {
        let deadline = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        let subject = Subject::new("Math", deadline).with_difficulty(Difficulty::Hard);
        assert_eq!(subject.name, "Math");
        assert_eq!(subject.deadline, deadline);
        assert_eq!(subject.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_subject_deserialize_defaults_difficulty() {
        let subject: Subject =
            serde_json::from_str(r#"{"name": "History", "deadline": "2025-12-26"}"#).unwrap();
        assert_eq!(subject.difficulty, Difficulty::Medium);
    }
}
