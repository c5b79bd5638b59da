//! # Roster
//!
//! The static list of profiles behind the gallery.
//!
//! Entries are start-time configuration: read once from a JSON file,
//! never created, mutated, or deleted at runtime. The order of entries
//! in the file is the display order.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown for entries that bring no picture of their own.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=2864&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate entry id: {0}")]
    DuplicateId(u32),
}

/// Ordered, immutable collection of [`Entry`] values.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    /// Ids must be unique within the list. An empty roster is fine.
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(RosterError::DuplicateId(entry.id));
            }
        }

        Ok(Self { entries })
    }

    /// Reads a JSON array of entries, keeping file order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<Entry> = serde_json::from_str(&raw)?;

        Self::new(entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
