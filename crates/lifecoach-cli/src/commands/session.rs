//! Session journal commands.

use clap::Subcommand;

use lifecoach_core::{Catalog, EnergyLevel, Journal, SessionRecord, SessionType};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a completed session
    Log {
        /// Energy level the session was coached for (low/medium/high)
        #[arg(long)]
        energy: String,
        /// Session time (morning/afternoon)
        #[arg(long)]
        time: String,
        /// Id of the activity taken up; omit for a rest session
        #[arg(long)]
        activity: Option<String>,
        /// Session length in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// List recorded sessions
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Log { energy, time, activity, duration } => {
            let energy = energy.parse::<EnergyLevel>()?;
            let session_type = time.parse::<SessionType>()?;

            let resolved = match activity {
                Some(ref id) => Some(Catalog::open()?.find(id)?.clone()),
                None => None,
            };

            let record = SessionRecord::new(session_type, energy, resolved.as_ref(), duration);
            let mut journal = Journal::open()?;
            journal.append(record.clone())?;

            match &record.activity_name {
                Some(name) => println!("Session logged: {} ({})", name, record.id),
                None => println!("Rest session logged: {}", record.id),
            }
        }
        SessionAction::List { json } => {
            let journal = Journal::open()?;

            if json {
                println!("{}", serde_json::to_string_pretty(journal.sessions())?);
            } else if journal.is_empty() {
                println!("No sessions logged yet.");
            } else {
                for record in journal.sessions() {
                    let what = record.activity_name.as_deref().unwrap_or("(rest)");
                    let duration = match record.duration_minutes {
                        Some(minutes) => format!("{minutes} min"),
                        None => "-".to_string(),
                    };
                    println!(
                        "{}  {:<10} {:<7} {:<24} {}",
                        record.created_at.format("%Y-%m-%d %H:%M"),
                        record.session_type.as_str(),
                        record.energy_level.as_str(),
                        what,
                        duration
                    );
                }
            }
        }
    }

    Ok(())
}
