//! Known sources, their priorities and their display order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in the source configuration. All of them are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No sources were configured.
    #[error("at least one source must be configured")]
    NoSources,

    /// A source was configured with an empty name.
    #[error("source name cannot be empty")]
    EmptyName,

    /// The same source name appears twice in the priority table.
    #[error("source {name:?} is configured more than once")]
    DuplicateSource { name: String },

    /// The display order names a source missing from the priority table.
    #[error("display order lists unknown source {name:?}")]
    UnknownDisplaySource { name: String },

    /// The display order names the same source twice.
    #[error("display order lists source {name:?} more than once")]
    DuplicateDisplaySource { name: String },

    /// A configured source is missing from the display order.
    #[error("source {name:?} is missing from the display order")]
    MissingDisplaySource { name: String },
}

/// One configured source and its priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    /// Lower values take precedence in identical-shape ties.
    pub priority: u32,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Validated source configuration.
///
/// Both the priority table and the display order are observable in the
/// output, so both keep a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    entries: Vec<SourceEntry>,
    display_order: Vec<String>,
}

impl SourceTable {
    /// Validates a priority table and an optional display order.
    ///
    /// Without an explicit display order, sources are shown by ascending
    /// priority; equal priorities keep their configured order.
    pub fn new(
        entries: Vec<SourceEntry>,
        display_order: Option<Vec<String>>,
    ) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::NoSources);
        }

        let mut names = HashSet::new();
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !names.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateSource {
                    name: entry.name.clone(),
                });
            }
        }

        let display_order = display_order.map_or_else(
            || Ok(priority_order(&entries)),
            |order| check_display_order(order, &entries),
        )?;

        Ok(Self {
            entries,
            display_order,
        })
    }

    /// Priority of a known source.
    pub fn priority(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.priority)
    }

    /// Source names in the order the formatter emits their groups.
    pub fn display_order(&self) -> impl Iterator<Item = &str> {
        self.display_order.iter().map(String::as_str)
    }

    /// Entries in display order.
    pub fn display_entries(&self) -> impl Iterator<Item = &SourceEntry> {
        self.display_order
            .iter()
            .filter_map(|name| self.entries.iter().find(|e| &e.name == name))
    }

    /// Entries in configuration order.
    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }
}

impl Default for SourceTable {
    fn default() -> Self {
        Self {
            entries: default_sources(),
            display_order: vec!["Posh".to_string(), "Grotty".to_string()],
        }
    }
}

/// Ascending priority; equal priorities keep configuration order.
fn priority_order(entries: &[SourceEntry]) -> Vec<String> {
    let mut by_priority: Vec<&SourceEntry> = entries.iter().collect();
    by_priority.sort_by_key(|e| e.priority);
    by_priority.into_iter().map(|e| e.name.clone()).collect()
}

/// Checks that `order` is a permutation of the configured source names.
fn check_display_order(
    order: Vec<String>,
    entries: &[SourceEntry],
) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();
    for name in &order {
        if !entries.iter().any(|e| &e.name == name) {
            return Err(ConfigError::UnknownDisplaySource { name: name.clone() });
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::DuplicateDisplaySource { name: name.clone() });
        }
    }
    if let Some(missing) = entries.iter().find(|e| !seen.contains(e.name.as_str())) {
        return Err(ConfigError::MissingDisplaySource {
            name: missing.name.clone(),
        });
    }
    Ok(order)
}

/// The stock priority table: Posh beats Grotty.
pub fn default_sources() -> Vec<SourceEntry> {
    vec![SourceEntry::new("Posh", 0), SourceEntry::new("Grotty", 1)]
}
