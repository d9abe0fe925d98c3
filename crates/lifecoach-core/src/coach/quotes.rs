//! Coaching copy: the quote catalog and reflection prompts.
//!
//! Quotes are grouped by theme. Selection is deterministic (always the
//! first line of the matching set) so identical requests read the same.

use crate::activity::{EnergyLevel, Priority, SessionType};

/// Quotes for low-energy moments. The second line is the rest
/// suggestion shown when nothing in the catalog fits.
pub const LOW_ENERGY: [&str; 3] = [
    "Gentle steps forward are still progress. Honor where you are.",
    "Rest is also a practice. Sometimes the best activity is to pause.",
    "What would it feel like to honor your current energy level?",
];

/// Quotes for high-priority picks.
pub const HIGH_PRIORITY: [&str; 3] = [
    "What matters most deserves your attention. Start with intention.",
    "Prioritizing what's important is an act of self-care.",
    "Focus on what truly matters, one step at a time.",
];

/// Quotes for low-priority ("luxury") picks.
pub const LOW_PRIORITY: [&str; 3] = [
    "Luxury tasks are valid too. What brings you joy today?",
    "Not everything needs to be urgent. What would feel good?",
    "Sometimes the best use of time is doing something you love.",
];

/// General-purpose quotes.
pub const GENERAL: [&str; 3] = [
    "Each moment is a choice. What feels right for you now?",
    "Listen to what your body and mind are telling you.",
    "There's no perfect way to spend your time. Trust your intuition.",
];

/// Pick the quote for a suggestion.
///
/// `priority` is the selected activity's priority, or `None` when
/// nothing was eligible (the rest outcome). Low energy always reads
/// gently, whatever was picked.
pub fn quote_for(energy: EnergyLevel, priority: Option<Priority>) -> &'static str {
    match (energy, priority) {
        (_, None) => LOW_ENERGY[1],
        (EnergyLevel::Low, Some(_)) => LOW_ENERGY[0],
        (_, Some(Priority::High)) => HIGH_PRIORITY[0],
        (_, Some(Priority::Low)) => LOW_PRIORITY[0],
        (_, Some(Priority::Medium)) => GENERAL[0],
    }
}

/// Pick the reflection prompt for a session.
///
/// One fixed string per (session type, energy) combination.
pub fn reflection_prompt(session_type: SessionType, energy: EnergyLevel) -> &'static str {
    match (session_type, energy) {
        (SessionType::Morning, EnergyLevel::High) => {
            "How do you want to channel this energy today?"
        }
        (SessionType::Morning, EnergyLevel::Medium) => {
            "What would make this morning feel meaningful?"
        }
        (SessionType::Morning, EnergyLevel::Low) => "What gentle start would serve you best?",
        (SessionType::Afternoon, EnergyLevel::High) => {
            "What would you like to accomplish with this afternoon?"
        }
        (SessionType::Afternoon, EnergyLevel::Medium) => "How can you make the most of this time?",
        (SessionType::Afternoon, EnergyLevel::Low) => "What would feel restorative right now?",
    }
}
