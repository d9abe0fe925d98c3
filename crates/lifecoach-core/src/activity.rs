//! Activity taxonomy shared across the library.
//!
//! This module defines the ordered priority/effort/energy scales, the
//! session type, and the `Activity` record that the coaching selector
//! operates on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Importance of an activity.
///
/// Variants are declared in ascending order; the derived `Ord` is the
/// ranking order used by the selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice-to-have ("luxury") activities
    Low,
    /// Regular activities (default)
    Medium,
    /// Activities that matter most right now
    High,
}

impl Priority {
    /// String form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParseError::invalid_token(
                "priority",
                s,
                &["low", "medium", "high"],
            )),
        }
    }
}

/// How demanding an activity is.
///
/// Variants are declared in ascending order; the derived `Ord` is used
/// by the eligibility check (effort must not exceed energy).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    /// Light activities (short walks, tidying)
    Low,
    /// Moderate activities (default)
    Medium,
    /// Demanding activities (deep work, workouts)
    High,
}

impl EffortLevel {
    /// String form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffortLevel::Low => "low",
            EffortLevel::Medium => "medium",
            EffortLevel::High => "high",
        }
    }
}

impl Default for EffortLevel {
    fn default() -> Self {
        EffortLevel::Medium
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffortLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EffortLevel::Low),
            "medium" => Ok(EffortLevel::Medium),
            "high" => Ok(EffortLevel::High),
            _ => Err(ParseError::invalid_token(
                "effort",
                s,
                &["low", "medium", "high"],
            )),
        }
    }
}

/// The user's self-reported energy level for a session.
///
/// Variants are declared in ascending order, matching `EffortLevel`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low energy (e.g., end of day)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (e.g., after rest)
    High,
}

impl EnergyLevel {
    /// Whether an activity at the given effort level is doable at this
    /// energy level. Effort must not exceed energy.
    pub fn supports(&self, effort: EffortLevel) -> bool {
        (effort as u8) <= (*self as u8)
    }

    /// String form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            _ => Err(ParseError::invalid_token(
                "energy",
                s,
                &["low", "medium", "high"],
            )),
        }
    }
}

/// Time of day a coaching session belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// Morning session
    Morning,
    /// Afternoon session
    Afternoon,
}

impl SessionType {
    /// String form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Morning => "morning",
            SessionType::Afternoon => "afternoon",
        }
    }
}

impl Default for SessionType {
    fn default() -> Self {
        SessionType::Morning
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(SessionType::Morning),
            "afternoon" => Ok(SessionType::Afternoon),
            _ => Err(ParseError::invalid_token(
                "time",
                s,
                &["morning", "afternoon"],
            )),
        }
    }
}

/// An activity in the user's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Unique identifier (uuid v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Importance ranking
    pub priority: Priority,
    /// How demanding the activity is
    pub effort_level: EffortLevel,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Create a new activity with a fresh id and timestamps.
    pub fn new(name: impl Into<String>, priority: Priority, effort_level: EffortLevel) -> Self {
        let now = Utc::now();
        Activity {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            priority,
            effort_level,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp after an edit.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_are_ascending() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(EffortLevel::Low < EffortLevel::Medium);
        assert!(EffortLevel::Medium < EffortLevel::High);
        assert!(EnergyLevel::Low < EnergyLevel::Medium);
        assert!(EnergyLevel::Medium < EnergyLevel::High);
    }

    #[test]
    fn defaults_match_session_input_defaults() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(EffortLevel::default(), EffortLevel::Medium);
        assert_eq!(EnergyLevel::default(), EnergyLevel::Medium);
        assert_eq!(SessionType::default(), SessionType::Morning);
    }

    #[test]
    fn supports_full_table() {
        use EffortLevel as F;
        use EnergyLevel as N;

        assert!(N::Low.supports(F::Low));
        assert!(!N::Low.supports(F::Medium));
        assert!(!N::Low.supports(F::High));

        assert!(N::Medium.supports(F::Low));
        assert!(N::Medium.supports(F::Medium));
        assert!(!N::Medium.supports(F::High));

        assert!(N::High.supports(F::Low));
        assert!(N::High.supports(F::Medium));
        assert!(N::High.supports(F::High));
    }

    #[test]
    fn from_str_accepts_known_tokens() {
        assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
        assert_eq!(EffortLevel::from_str("LOW").unwrap(), EffortLevel::Low);
        assert_eq!(EnergyLevel::from_str("Medium").unwrap(), EnergyLevel::Medium);
        assert_eq!(
            SessionType::from_str("afternoon").unwrap(),
            SessionType::Afternoon
        );
    }

    #[test]
    fn from_str_rejects_unknown_tokens() {
        let err = EnergyLevel::from_str("extreme").unwrap_err();
        assert!(err.to_string().contains("extreme"));
        assert!(Priority::from_str("").is_err());
        assert!(SessionType::from_str("evening").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_str(&p.to_string()).unwrap(), p);
        }
        for t in [SessionType::Morning, SessionType::Afternoon] {
            assert_eq!(SessionType::from_str(&t.to_string()).unwrap(), t);
        }
    }

    #[test]
    fn serde_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&SessionType::Afternoon).unwrap(),
            "\"afternoon\""
        );
        let energy: EnergyLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(energy, EnergyLevel::Low);
    }

    #[test]
    fn activity_creation() {
        let activity = Activity::new("Deep work", Priority::High, EffortLevel::High);
        assert_eq!(activity.name, "Deep work");
        assert_eq!(activity.priority, Priority::High);
        assert_eq!(activity.effort_level, EffortLevel::High);
        assert!(!activity.id.is_empty());
        assert_eq!(activity.created_at, activity.updated_at);
    }

    #[test]
    fn activity_serialization() {
        let activity = Activity::new("Read", Priority::Low, EffortLevel::Low);
        let json = serde_json::to_string(&activity).unwrap();
        assert!(json.contains("\"effort_level\":\"low\""));
        let decoded: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, activity);
    }
}
