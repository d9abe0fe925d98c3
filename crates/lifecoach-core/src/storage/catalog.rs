//! JSON-backed activity catalog.
//!
//! The catalog is a plain ordered list persisted at
//! `~/.config/lifecoach/activities.json`. File order is meaningful: it
//! is the order the selector sees, and ties between otherwise equal
//! activities resolve to the earlier entry.

use std::path::PathBuf;

use crate::activity::{Activity, EffortLevel, Priority};
use crate::error::{ParseError, Result, StorageError};
use crate::storage::data_dir;

/// Catalog file name inside the data directory.
const CATALOG_FILE: &str = "activities.json";

/// File-backed activity catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    activities: Vec<Activity>,
}

impl Catalog {
    /// Open the catalog at `~/.config/lifecoach/activities.json`.
    ///
    /// A missing file yields an empty catalog; the file is created on
    /// the first write.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the
    /// file exists but cannot be parsed.
    pub fn open() -> Result<Self> {
        Self::open_at(data_dir()?.join(CATALOG_FILE))
    }

    /// Open a catalog at an explicit path (tests, embedding).
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let activities = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::ParseFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(_) => Vec::new(),
        };
        Ok(Self { path, activities })
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.activities)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// All activities in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Append a new activity and persist.
    ///
    /// # Errors
    /// Returns an error if the name is empty or the file cannot be
    /// written.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        effort_level: EffortLevel,
    ) -> Result<Activity> {
        let name = name.into();
        if name.is_empty() {
            return Err(ParseError::Empty {
                field: "name".to_string(),
            }
            .into());
        }
        let activity = Activity::new(name, priority, effort_level);
        self.activities.push(activity.clone());
        self.save()?;
        Ok(activity)
    }

    /// Find an activity by full id or unique id prefix.
    ///
    /// # Errors
    /// Returns an error if nothing matches, or the prefix matches more
    /// than one activity.
    pub fn find(&self, id_or_prefix: &str) -> Result<&Activity> {
        if let Some(exact) = self.activities.iter().find(|a| a.id == id_or_prefix) {
            return Ok(exact);
        }
        if id_or_prefix.is_empty() {
            return Err(StorageError::ActivityNotFound(id_or_prefix.to_string()).into());
        }

        let mut matches = self
            .activities
            .iter()
            .filter(|a| a.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(StorageError::ActivityNotFound(id_or_prefix.to_string()).into()),
            (Some(_), Some(_)) => {
                let count = self
                    .activities
                    .iter()
                    .filter(|a| a.id.starts_with(id_or_prefix))
                    .count();
                Err(StorageError::AmbiguousActivity {
                    prefix: id_or_prefix.to_string(),
                    matches: count,
                }
                .into())
            }
        }
    }

    /// Update fields of an activity and persist.
    ///
    /// Only the provided fields change; `updated_at` is refreshed.
    pub fn update(
        &mut self,
        id_or_prefix: &str,
        name: Option<String>,
        priority: Option<Priority>,
        effort_level: Option<EffortLevel>,
    ) -> Result<Activity> {
        let id = self.find(id_or_prefix)?.id.clone();
        // find() succeeded, so the id is present.
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StorageError::ActivityNotFound(id.clone()))?;

        if let Some(n) = name {
            if n.is_empty() {
                return Err(ParseError::Empty {
                    field: "name".to_string(),
                }
                .into());
            }
            activity.name = n;
        }
        if let Some(p) = priority {
            activity.priority = p;
        }
        if let Some(e) = effort_level {
            activity.effort_level = e;
        }
        activity.touch();

        let updated = activity.clone();
        self.save()?;
        Ok(updated)
    }

    /// Remove an activity and persist. Returns the removed record.
    pub fn remove(&mut self, id_or_prefix: &str) -> Result<Activity> {
        let id = self.find(id_or_prefix)?.id.clone();
        let index = self
            .activities
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StorageError::ActivityNotFound(id.clone()))?;
        let removed = self.activities.remove(index);
        self.save()?;
        Ok(removed)
    }
}
