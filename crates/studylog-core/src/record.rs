use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted (goal, daily record) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub goal: String,
    pub daily_record: String,
}

impl Record {
    /// Line used for this record inside a report prompt
    pub fn prompt_line(&self) -> String {
        format!("Goal: {}, Daily Record: {}", self.goal, self.daily_record)
    }
}

/// How strictly `goal` and `daily_record` are checked before insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject values that are empty after trimming whitespace.
    #[default]
    Trimmed,
    /// Reject only the empty string; whitespace-only input is accepted.
    Presence,
}

impl ValidationPolicy {
    /// Check both fields, `goal` first. Values are never rewritten.
    pub fn validate(&self, goal: &str, daily_record: &str) -> Result<()> {
        self.check_field("goal", goal)?;
        self.check_field("daily_record", daily_record)
    }

    fn check_field(&self, name: &str, value: &str) -> Result<()> {
        let empty = match self {
            ValidationPolicy::Trimmed => value.trim().is_empty(),
            ValidationPolicy::Presence => value.is_empty(),
        };

        if empty {
            return Err(Error::Validation(format!("{} must not be empty", name)));
        }

        Ok(())
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Trimmed => write!(f, "trimmed"),
            ValidationPolicy::Presence => write!(f, "presence"),
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trimmed" | "trim" => Ok(ValidationPolicy::Trimmed),
            "presence" | "present" => Ok(ValidationPolicy::Presence),
            _ => Err(format!("Unknown validation policy: {}", s)),
        }
    }
}
