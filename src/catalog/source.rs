use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::catalog::profile::{Profile, ProfileId};

/// Errors raised while assembling a catalog from decoded records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("profile id '{id}' appears more than once in the catalog")]
    DuplicateId { id: ProfileId },
}

/// An immutable snapshot of every profile known to the application.
///
/// Order is the file order; queries address profiles by index into this
/// snapshot so derived views never clone records.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    /// Wrap decoded records, rejecting snapshots with colliding ids.
    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&ProfileId> = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(&profile.id) {
                return Err(CatalogError::DuplicateId {
                    id: profile.id.clone(),
                });
            }
        }
        Ok(Self { profiles })
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Load a catalog from a JSON file holding an array of profile records.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let profiles: Vec<Profile> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    Catalog::from_profiles(profiles)
        .with_context(|| format!("invalid catalog file {}", path.display()))
}

/// Built-in demonstration catalog used by `--sample` and the docs.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let profiles = vec![
        Profile::new("1", "Prompt Polisher", "https://chat.example.com/g/prompt-polisher")
            .with_description("Rewrites rough prompts into precise, testable instructions")
            .with_categories(["writing"])
            .with_tags(["prompts", "editing"])
            .with_public(true)
            .with_updated("2024-11-02T09:30:00Z"),
        Profile::new("2", "Rust Reviewer", "https://chat.example.com/g/rust-reviewer")
            .with_description("Reads diffs and flags ownership and error-handling slips")
            .with_categories(["coding"])
            .with_tags(["rust", "review"])
            .with_public(true)
            .with_updated("2025-01-18T17:05:00Z"),
        Profile::new("3", "Trip Sketcher", "https://chat.example.com/g/trip-sketcher")
            .with_description("Drafts day-by-day travel outlines from a budget and a season")
            .with_categories(["planning", "travel"])
            .with_tags(["itinerary"])
            .with_public(false)
            .with_updated("2024-08-21T12:00:00Z"),
        Profile::new("4", "Regex Coach", "https://chat.example.com/g/regex-coach")
            .with_description("Explains and incrementally builds regular expressions")
            .with_categories(["coding"])
            .with_tags(["regex", "teaching"])
            .with_public(true)
            .with_updated("2024-12-05T08:45:00Z"),
        Profile::new("5", "Menu Muse", "https://chat.example.com/g/menu-muse")
            .with_description("Suggests weeknight menus from whatever the fridge holds")
            .with_categories(["cooking"])
            .with_tags(["recipes", "pantry"])
            .with_public(false),
    ];
    Catalog::from_profiles(profiles).expect("sample catalog ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn duplicate_ids_are_rejected() {
        let profiles = vec![
            Profile::new("9", "First", "https://x/1"),
            Profile::new("9", "Second", "https://x/2"),
        ];
        let err = Catalog::from_profiles(profiles).unwrap_err();
        assert_eq!(
            err.to_string(),
            "profile id '9' appears more than once in the catalog"
        );
    }

    #[test]
    fn file_order_is_preserved() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog
            .profiles()
            .iter()
            .map(|profile| profile.name.as_str())
            .collect();
        assert_eq!(names[0], "Prompt Polisher");
        assert_eq!(names[4], "Menu Muse");
    }

    #[test]
    fn load_catalog_reads_a_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"name":"Helper","url":"https://x/h","public":true}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(0).unwrap().public);
    }

    #[test]
    fn load_catalog_reports_the_offending_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse catalog file"));
    }
}
