//! CLI command implementations.

pub mod activity;
pub mod coach;
pub mod config;
pub mod session;
