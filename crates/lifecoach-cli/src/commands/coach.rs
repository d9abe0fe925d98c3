//! Coaching suggestion command.

use chrono::{Local, Timelike};
use clap::Subcommand;

use lifecoach_core::{select_activity, Catalog, Config, EnergyLevel, SessionType};

#[derive(Subcommand)]
pub enum CoachAction {
    /// Suggest an activity for the current energy and time of day
    Suggest {
        /// Energy level (low/medium/high); falls back to the configured default
        #[arg(long)]
        energy: Option<String>,
        /// Session time (morning/afternoon); inferred from the clock when omitted
        #[arg(long)]
        time: Option<String>,
        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CoachAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CoachAction::Suggest { energy, time, json } => suggest(energy, time, json),
    }
}

fn suggest(
    energy: Option<String>,
    time: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let energy = match energy {
        Some(raw) => raw.parse::<EnergyLevel>()?,
        None => config.coach.default_energy,
    };
    let session_type = match time {
        Some(raw) => raw.parse::<SessionType>()?,
        None => config.session_type_for_hour(Local::now().hour()),
    };

    let catalog = Catalog::open()?;
    let suggestion = select_activity(catalog.activities(), energy, session_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("=== Coaching Suggestion ===");
    println!();
    match &suggestion.main_activity {
        Some(activity) => {
            println!("Suggested: {}", activity.name);
            println!("  Priority: {}", activity.priority);
            println!("  Effort:   {}", activity.effort_level);
            println!("  Id:       {}", activity.id);
        }
        None => {
            println!("Nothing in the catalog fits right now. Take a rest.");
        }
    }
    println!();
    println!("\"{}\"", suggestion.quote);
    println!();
    println!("Reflect: {}", suggestion.reflection_prompt);
    println!();
    println!("Context: {} energy, {} session", energy, session_type);

    Ok(())
}
