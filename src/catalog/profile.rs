use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identity of a profile within one catalog snapshot.
///
/// Catalog files in the wild carry ids as either JSON strings or plain
/// numbers; both deserialize into the same opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileId(pub String);

impl<'de> Deserialize<'de> for ProfileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => ProfileId(text),
            Raw::Number(number) => ProfileId(number.to_string()),
        })
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One shareable assistant profile as listed in the catalog file.
///
/// Every field except `id` and `name` is optional in the file and decodes
/// to a safe default, so a sparse record is never a load error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "clean_labels")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "clean_labels")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "hero")]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default, alias = "updated")]
    pub updated_at: Option<String>,
}

impl Profile {
    /// Build a profile with the fields every catalog record must carry.
    #[must_use]
    pub fn new(id: impl Into<ProfileId>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            url: url.into(),
            hero_image: None,
            public: false,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = dedup_preserving(categories.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_preserving(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    #[must_use]
    pub fn with_updated(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    #[must_use]
    pub fn with_hero_image(mut self, hero_image: impl Into<String>) -> Self {
        self.hero_image = Some(hero_image.into());
        self
    }

    /// Whether the profile carries a usable share target.
    ///
    /// Copy, share, and card actions all require a link; browsing does not.
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

fn clean_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(dedup_preserving(raw))
}

/// Trim labels, drop empties, and keep the first occurrence of each;
/// display order is the order the record listed them in.
pub(crate) fn dedup_preserving(values: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !cleaned.iter().any(|existing| existing == trimmed) {
            cleaned.push(trimmed.to_string());
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_decode_to_the_same_key() {
        let numeric: Profile = serde_json::from_str(r#"{"id":7,"name":"A"}"#).unwrap();
        let text: Profile = serde_json::from_str(r#"{"id":"7","name":"A"}"#).unwrap();
        assert_eq!(numeric.id, text.id);
        assert_eq!(numeric.id, ProfileId::from("7"));
    }

    #[test]
    fn sparse_records_decode_with_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"id":1,"name":"Helper"}"#).unwrap();
        assert_eq!(profile.description, "");
        assert!(profile.categories.is_empty());
        assert!(profile.tags.is_empty());
        assert!(!profile.public);
        assert!(profile.updated_at.is_none());
        assert!(!profile.has_link());
    }

    #[test]
    fn labels_keep_first_seen_order_without_duplicates() {
        let profile = Profile::new("1", "Helper", "https://x/y")
            .with_categories(["write", "code", "write", " code "]);
        assert_eq!(profile.categories, vec!["write", "code"]);
    }

    #[test]
    fn hero_alias_is_accepted() {
        let profile: Profile =
            serde_json::from_str(r#"{"id":1,"name":"A","hero":"img/a.png"}"#).unwrap();
        assert_eq!(profile.hero_image.as_deref(), Some("img/a.png"));
    }
}
