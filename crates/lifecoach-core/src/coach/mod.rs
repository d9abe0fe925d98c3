//! Coaching selector.
//!
//! This module picks the single best-fit activity for the user's
//! current energy level and produces the supporting copy (a quote and
//! a reflection prompt).
//!
//! ## Design
//!
//! - Energy-aware: only activities whose effort the current energy
//!   supports are considered
//! - Deterministic: no randomness, stable ordering; identical inputs
//!   yield identical suggestions
//! - Pure: no I/O, no mutation of the caller's catalog

pub mod quotes;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, EnergyLevel, Priority, SessionType};

/// Outcome of one coaching request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoachSuggestion {
    /// The recommended activity, or `None` when nothing in the catalog
    /// fits the current energy (the rest outcome)
    pub main_activity: Option<Activity>,
    /// Motivational quote matching the outcome
    pub quote: String,
    /// Reflection prompt for the session
    pub reflection_prompt: String,
}

impl CoachSuggestion {
    /// Whether this suggestion is the rest outcome.
    pub fn is_rest(&self) -> bool {
        self.main_activity.is_none()
    }
}

/// Select the best-fit activity for the current energy and time of day.
///
/// # Arguments
/// * `activities` - The user's catalog, in catalog order
/// * `energy` - Self-reported energy level
/// * `session_type` - Morning or afternoon (affects only the prompt)
///
/// # Returns
/// A suggestion with at most one activity from the catalog. The
/// activity is `None` exactly when no catalog entry is doable at the
/// given energy; that is a modeled outcome, not an error.
pub fn select_activity(
    activities: &[Activity],
    energy: EnergyLevel,
    session_type: SessionType,
) -> CoachSuggestion {
    let reflection_prompt = quotes::reflection_prompt(session_type, energy).to_string();

    // Eligibility: effort must not exceed current energy.
    let mut eligible: Vec<&Activity> = activities
        .iter()
        .filter(|a| energy.supports(a.effort_level))
        .collect();

    if eligible.is_empty() {
        return CoachSuggestion {
            main_activity: None,
            quote: quotes::quote_for(energy, None).to_string(),
            reflection_prompt,
        };
    }

    // High priority first; on a tie the lighter activity wins. sort_by
    // is stable, so full ties keep catalog order.
    eligible.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.effort_level.cmp(&b.effort_level))
    });

    // At medium or high energy, favor a high-priority activity when one
    // is eligible; otherwise (and at low energy) take the sorted head.
    let main = match energy {
        EnergyLevel::Medium | EnergyLevel::High => eligible
            .iter()
            .find(|a| a.priority == Priority::High)
            .copied()
            .unwrap_or(eligible[0]),
        EnergyLevel::Low => eligible[0],
    };

    CoachSuggestion {
        main_activity: Some(main.clone()),
        quote: quotes::quote_for(energy, Some(main.priority)).to_string(),
        reflection_prompt,
    }
}
