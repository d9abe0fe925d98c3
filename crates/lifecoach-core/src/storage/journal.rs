//! JSON-backed session journal.
//!
//! Append-only record of accepted coaching sessions, persisted at
//! `~/.config/lifecoach/sessions.json`. Records are kept raw; there is
//! no aggregation here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::activity::{Activity, EnergyLevel, SessionType};
use crate::error::{Result, StorageError};
use crate::storage::data_dir;

/// Journal file name inside the data directory.
const JOURNAL_FILE: &str = "sessions.json";

/// One accepted coaching session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    /// Unique identifier (uuid v4)
    pub id: String,
    /// Morning or afternoon
    pub session_type: SessionType,
    /// Energy level the suggestion was made for
    pub energy_level: EnergyLevel,
    /// Accepted activity id, `None` for a rest session
    pub activity_id: Option<String>,
    /// Activity name snapshot at acceptance time (for display)
    pub activity_name: Option<String>,
    /// Session length in minutes, if tracked
    pub duration_minutes: Option<u32>,
    /// When the session was logged
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record with a fresh id and timestamp.
    ///
    /// `activity` is `None` for a rest session.
    pub fn new(
        session_type: SessionType,
        energy_level: EnergyLevel,
        activity: Option<&Activity>,
        duration_minutes: Option<u32>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_type,
            energy_level,
            activity_id: activity.map(|a| a.id.clone()),
            activity_name: activity.map(|a| a.name.clone()),
            duration_minutes,
            created_at: Utc::now(),
        }
    }

    /// Whether this was a rest session.
    pub fn is_rest(&self) -> bool {
        self.activity_id.is_none()
    }
}

/// File-backed session journal.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
    sessions: Vec<SessionRecord>,
}

impl Journal {
    /// Open the journal at `~/.config/lifecoach/sessions.json`.
    ///
    /// A missing file yields an empty journal; the file is created on
    /// the first append.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the
    /// file exists but cannot be parsed.
    pub fn open() -> Result<Self> {
        Self::open_at(data_dir()?.join(JOURNAL_FILE))
    }

    /// Open a journal at an explicit path (tests, embedding).
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let sessions = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::ParseFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(_) => Vec::new(),
        };
        Ok(Self { path, sessions })
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.sessions)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Append a record and persist.
    pub fn append(&mut self, record: SessionRecord) -> Result<()> {
        self.sessions.push(record);
        self.save()
    }

    /// All records in insertion order.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
