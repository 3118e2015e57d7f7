use std::collections::BTreeSet;

use crate::catalog::source::Catalog;

/// Sentinel category label meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Category labels offered by the UI: the sentinel first, then every
/// label any profile declares, deduplicated and sorted.
///
/// Derived from the catalog alone, so a reload only needs this function
/// called again. A profile label that collides with the sentinel is
/// skipped rather than listed twice.
#[must_use]
pub fn category_labels(catalog: &Catalog) -> Vec<String> {
    let mut unique: BTreeSet<&str> = BTreeSet::new();
    for profile in catalog.profiles() {
        for label in &profile.categories {
            if label != ALL_CATEGORIES {
                unique.insert(label);
            }
        }
    }

    let mut labels = Vec::with_capacity(unique.len() + 1);
    labels.push(ALL_CATEGORIES.to_string());
    labels.extend(unique.into_iter().map(str::to_string));
    labels
}
