pub mod catalog;
mod config;
pub mod journal;

pub use catalog::Catalog;
pub use config::Config;
pub use journal::{Journal, SessionRecord};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/lifecoach[-dev]/` based on LIFECOACH_ENV.
///
/// Set LIFECOACH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFECOACH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifecoach-dev")
    } else {
        base_dir.join("lifecoach")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
