//! Pure derivation of the visible row set from one catalog snapshot and
//! one set of controls.
//!
//! Stages run in a fixed order: visibility, category, text search, sort.
//! The three filters are independent predicates, so their relative order
//! only affects work done, never the result set.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate};

use crate::catalog::{ALL_CATEGORIES, Catalog, Profile};
use crate::query::controls::{Controls, SortOrder};

/// Indices into `catalog.profiles()` that survive the filters, in final
/// display order. Never fails; an impossible combination yields an empty
/// vector.
#[must_use]
pub fn visible_rows(catalog: &Catalog, controls: &Controls) -> Vec<usize> {
    let needle = controls.query.trim().to_lowercase();
    let mut rows: Vec<usize> = catalog
        .profiles()
        .iter()
        .enumerate()
        .filter(|(_, profile)| !controls.public_only || profile.public)
        .filter(|(_, profile)| category_matches(profile, &controls.category))
        .filter(|(_, profile)| needle.is_empty() || matches_search(profile, &needle))
        .map(|(index, _)| index)
        .collect();
    sort_rows(catalog, controls.sort, &mut rows);
    rows
}

fn category_matches(profile: &Profile, category: &str) -> bool {
    category == ALL_CATEGORIES || profile.categories.iter().any(|label| label == category)
}

/// Case-insensitive substring match over name, description, and the
/// tags joined with single spaces. `needle` must already be lowercased.
fn matches_search(profile: &Profile, needle: &str) -> bool {
    profile.name.to_lowercase().contains(needle)
        || profile.description.to_lowercase().contains(needle)
        || profile.tags.join(" ").to_lowercase().contains(needle)
}

fn sort_rows(catalog: &Catalog, sort: SortOrder, rows: &mut Vec<usize>) {
    let profiles = catalog.profiles();
    match sort {
        // Stable sort, so rows with equal stamps keep catalog order.
        SortOrder::Recent => {
            rows.sort_by_cached_key(|&index| {
                Reverse(updated_stamp(profiles[index].updated_at.as_deref()))
            });
        }
        SortOrder::Alphabetical => {
            rows.sort_by_cached_key(|&index| profiles[index].name.to_lowercase());
        }
    }
}

/// Milliseconds since the epoch for an RFC 3339 stamp or a bare
/// `YYYY-MM-DD` date; missing or unparsable stamps count as zero and
/// therefore sort last under [`SortOrder::Recent`].
#[must_use]
pub fn updated_stamp(raw: Option<&str>) -> i64 {
    let Some(value) = raw else { return 0 };
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return stamp.timestamp_millis();
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|stamp| stamp.and_utc().timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Profile;

    fn fixture() -> Catalog {
        Catalog::from_profiles(vec![
            Profile::new("1", "Helper Bot", "https://x/helper")
                .with_description("Answers quick questions")
                .with_categories(["coding"])
                .with_tags(["assistant", "qa"])
                .with_public(true)
                .with_updated("2024-06-01T00:00:00Z"),
            Profile::new("2", "draft wizard", "https://x/draft")
                .with_description("Outlines blog posts")
                .with_categories(["writing"])
                .with_tags(["drafts"])
                .with_public(false)
                .with_updated("2025-02-10T00:00:00Z"),
            Profile::new("3", "Archive Ant", "https://x/archive")
                .with_description("Summarizes old threads")
                .with_categories(["coding", "writing"])
                .with_tags(["summary"])
                .with_public(true),
        ])
        .unwrap()
    }

    fn names(catalog: &Catalog, rows: &[usize]) -> Vec<String> {
        rows.iter()
            .map(|&index| catalog.profiles()[index].name.clone())
            .collect()
    }

    #[test]
    fn public_only_hides_private_profiles() {
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "Alpha", "").with_public(true),
            Profile::new("2", "Beta", ""),
        ])
        .unwrap();
        let mut controls = Controls::new();
        controls.public_only = true;

        assert_eq!(names(&catalog, &visible_rows(&catalog, &controls)), ["Alpha"]);
    }

    #[test]
    fn recent_sort_puts_the_newer_profile_first() {
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "Alpha", "").with_updated("2024-01-01T00:00:00Z"),
            Profile::new("2", "Beta", "").with_updated("2024-06-01T00:00:00Z"),
        ])
        .unwrap();
        let controls = Controls::new();

        assert_eq!(
            names(&catalog, &visible_rows(&catalog, &controls)),
            ["Beta", "Alpha"]
        );
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let catalog = fixture();

        let mut controls = Controls::new();
        controls.query = "helper".into();
        assert_eq!(names(&catalog, &visible_rows(&catalog, &controls)), ["Helper Bot"]);

        controls.query = "DRAFT".into();
        assert_eq!(
            names(&catalog, &visible_rows(&catalog, &controls)),
            ["draft wizard"]
        );
    }

    #[test]
    fn search_covers_description_and_tags() {
        let catalog = fixture();
        let mut controls = Controls::new();
        controls.sort = SortOrder::Alphabetical;

        controls.query = "threads".into();
        assert_eq!(names(&catalog, &visible_rows(&catalog, &controls)), ["Archive Ant"]);

        controls.query = "qa".into();
        assert_eq!(names(&catalog, &visible_rows(&catalog, &controls)), ["Helper Bot"]);
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let catalog = fixture();
        let mut controls = Controls::new();
        controls.query = "   ".into();

        assert_eq!(visible_rows(&catalog, &controls).len(), catalog.len());
    }

    #[test]
    fn filters_select_the_same_set_in_any_order() {
        let catalog = fixture();
        let mut controls = Controls::new();
        controls.public_only = true;
        controls.category = "coding".into();
        controls.query = "a".into();

        let combined: Vec<usize> = visible_rows(&catalog, &controls);

        // Apply each predicate on its own and intersect by hand.
        let mut by_hand: Vec<usize> = (0..catalog.len())
            .filter(|&index| {
                let profile = &catalog.profiles()[index];
                profile.public
                    && profile.categories.iter().any(|label| label == "coding")
                    && matches_search(profile, "a")
            })
            .collect();
        sort_rows(&catalog, controls.sort, &mut by_hand);

        assert_eq!(combined, by_hand);
    }

    #[test]
    fn equal_stamps_keep_catalog_order() {
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "First", "").with_updated("2024-03-03T00:00:00Z"),
            Profile::new("2", "Second", "").with_updated("2024-03-03T00:00:00Z"),
            Profile::new("3", "Third", ""),
            Profile::new("4", "Fourth", ""),
        ])
        .unwrap();
        let controls = Controls::new();

        assert_eq!(
            names(&catalog, &visible_rows(&catalog, &controls)),
            ["First", "Second", "Third", "Fourth"]
        );
    }

    #[test]
    fn undated_profiles_sort_after_dated_ones() {
        let catalog = fixture();
        let controls = Controls::new();

        assert_eq!(
            names(&catalog, &visible_rows(&catalog, &controls)),
            ["draft wizard", "Helper Bot", "Archive Ant"]
        );
    }

    #[test]
    fn unparsable_stamps_count_as_undated() {
        assert_eq!(updated_stamp(Some("last tuesday")), 0);
        assert_eq!(updated_stamp(None), 0);
        assert!(updated_stamp(Some("2024-06-01T00:00:00Z")) > 0);
    }

    #[test]
    fn bare_dates_parse_as_midnight_utc() {
        assert_eq!(
            updated_stamp(Some("2024-06-01")),
            updated_stamp(Some("2024-06-01T00:00:00Z"))
        );
    }

    #[test]
    fn alphabetical_sort_ignores_case() {
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "cherry", ""),
            Profile::new("2", "Apple", ""),
            Profile::new("3", "banana", ""),
        ])
        .unwrap();
        let mut controls = Controls::new();
        controls.sort = SortOrder::Alphabetical;

        assert_eq!(
            names(&catalog, &visible_rows(&catalog, &controls)),
            ["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn equal_names_keep_catalog_order() {
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "Twin", ""),
            Profile::new("2", "Twin", ""),
            Profile::new("3", "Apex", ""),
        ])
        .unwrap();
        let mut controls = Controls::new();
        controls.sort = SortOrder::Alphabetical;

        assert_eq!(visible_rows(&catalog, &controls), [2, 0, 1]);
    }

    #[test]
    fn same_inputs_always_derive_the_same_rows() {
        let catalog = fixture();
        let mut controls = Controls::new();
        controls.query = "a".into();
        controls.category = "coding".into();

        let first = visible_rows(&catalog, &controls);
        let second = visible_rows(&catalog, &controls);
        assert_eq!(first, second);
    }

    #[test]
    fn impossible_combinations_yield_an_empty_view() {
        let catalog = fixture();
        let mut controls = Controls::new();
        controls.query = "no such profile anywhere".into();

        assert!(visible_rows(&catalog, &controls).is_empty());
    }
}
