//! Catalog records and the snapshots built from them.

pub mod categories;
pub mod profile;
pub mod source;

pub use categories::{ALL_CATEGORIES, category_labels};
pub use profile::{Profile, ProfileId};
pub use source::{Catalog, CatalogError, load_catalog, sample_catalog};
