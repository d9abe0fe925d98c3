//! # Lifecoach Core Library
//!
//! This library provides the core logic for Lifecoach, a personal
//! coaching tool. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over this
//! library.
//!
//! ## Architecture
//!
//! - **Coaching Selector**: a pure, deterministic function mapping the
//!   user's activity catalog, energy level, and time of day to a single
//!   recommended activity plus supporting copy
//! - **Activity taxonomy**: ordered priority/effort/energy scales with
//!   compiler-checked exhaustiveness
//! - **Storage**: TOML-based configuration and JSON-based activity
//!   catalog and session journal
//!
//! ## Key Components
//!
//! - [`coach::select_activity`]: the selector
//! - [`Activity`], [`EnergyLevel`], [`SessionType`]: the data model
//! - [`Catalog`], [`Journal`], [`Config`]: the storage shell

pub mod activity;
pub mod coach;
pub mod error;
pub mod storage;

pub use activity::{Activity, EffortLevel, EnergyLevel, Priority, SessionType};
pub use coach::{select_activity, CoachSuggestion};
pub use error::{CoreError, ParseError, StorageError};
pub use storage::{Catalog, Config, Journal, SessionRecord};
