//! Activity catalog commands.

use clap::Subcommand;

use lifecoach_core::{Catalog, EffortLevel, Priority};

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add an activity to the catalog
    Add {
        /// Activity name
        name: String,
        /// Priority (low/medium/high)
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Effort level (low/medium/high)
        #[arg(long, default_value = "medium")]
        effort: String,
    },
    /// List activities in catalog order
    List {
        /// Only show activities with this priority
        #[arg(long)]
        priority: Option<String>,
        /// Only show activities with this effort level
        #[arg(long)]
        effort: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update an activity's name, priority, or effort level
    Update {
        /// Activity id, or a unique prefix of one
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// New effort level
        #[arg(long)]
        effort: Option<String>,
    },
    /// Remove an activity from the catalog
    Remove {
        /// Activity id, or a unique prefix of one
        id: String,
    },
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = Catalog::open()?;

    match action {
        ActivityAction::Add { name, priority, effort } => {
            let priority = priority.parse::<Priority>()?;
            let effort = effort.parse::<EffortLevel>()?;
            let activity = catalog.add(name, priority, effort)?;
            println!("Activity added: {}", activity.id);
        }
        ActivityAction::List { priority, effort, json } => {
            let priority = priority.map(|p| p.parse::<Priority>()).transpose()?;
            let effort = effort.map(|e| e.parse::<EffortLevel>()).transpose()?;
            let filtered: Vec<_> = catalog
                .activities()
                .iter()
                .filter(|a| priority.map_or(true, |p| a.priority == p))
                .filter(|a| effort.map_or(true, |e| a.effort_level == e))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else if filtered.is_empty() {
                println!("No activities. Add one with: lifecoach-cli activity add <name>");
            } else {
                for activity in filtered {
                    let short_id = activity.id.get(..8).unwrap_or(&activity.id);
                    println!(
                        "{}  {:<24} priority={:<8} effort={}",
                        short_id,
                        activity.name,
                        activity.priority.as_str(),
                        activity.effort_level.as_str()
                    );
                }
            }
        }
        ActivityAction::Update { id, name, priority, effort } => {
            let priority = priority.map(|p| p.parse::<Priority>()).transpose()?;
            let effort = effort.map(|e| e.parse::<EffortLevel>()).transpose()?;
            let updated = catalog.update(&id, name, priority, effort)?;
            println!("Activity updated: {}", updated.id);
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        ActivityAction::Remove { id } => {
            let removed = catalog.remove(&id)?;
            println!("Activity removed: {} ({})", removed.id, removed.name);
        }
    }

    Ok(())
}
