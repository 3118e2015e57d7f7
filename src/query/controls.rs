use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ALL_CATEGORIES;

/// Ordering applied to the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently updated first; undated profiles last.
    #[default]
    Recent,
    /// Case-insensitive by profile name.
    Alphabetical,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Recent => Self::Alphabetical,
            Self::Alphabetical => Self::Recent,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Alphabetical => "name",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "alphabetical" | "name" => Ok(Self::Alphabetical),
            other => Err(format!(
                "unknown sort order '{other}' (expected 'recent' or 'alphabetical')"
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user can adjust that shapes the visible row set.
///
/// One value of this type plus one catalog snapshot fully determines the
/// browse view; there is no other hidden input to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub query: String,
    pub category: String,
    pub public_only: bool,
    pub sort: SortOrder,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            public_only: false,
            sort: SortOrder::default(),
        }
    }
}

impl Controls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the category to the sentinel when it no longer names a label
    /// in the current catalog, e.g. after a reload removed it.
    pub fn clamp_category(&mut self, labels: &[String]) {
        if !labels.iter().any(|label| label == &self.category) {
            log::debug!("category '{}' is gone, falling back to '{ALL_CATEGORIES}'", self.category);
            self.category = ALL_CATEGORIES.to_string();
        }
    }

    /// Move the category selection by `step` through `labels`, wrapping at
    /// both ends. A stale current category restarts from the sentinel.
    pub fn cycle_category(&mut self, labels: &[String], step: isize) {
        if labels.is_empty() {
            return;
        }
        let current = labels
            .iter()
            .position(|label| label == &self.category)
            .unwrap_or(0);
        let count = labels.len() as isize;
        let next = (current as isize + step).rem_euclid(count) as usize;
        self.category = labels[next].clone();
    }
}
