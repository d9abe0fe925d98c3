use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifecoach-cli", version, about = "Lifecoach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get an activity suggestion for a session
    Coach {
        #[command(subcommand)]
        action: commands::coach::CoachAction,
    },
    /// Manage the activity catalog
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Record and review coaching sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Coach { action } => commands::coach::run(action),
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
