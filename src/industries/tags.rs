//! Industry Tags
//!
//! A sorted, de-duplicated set of lower-cased industry labels backed by a `SmallVec`.

use smallvec::SmallVec;

/// Normalise an industry label for storage and lookup.
pub fn normalize_industry(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

/// Set of industries a service is marketed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryTags {
    tags: SmallVec<[String; 6]>,
}

impl IndustryTags {
    /// Create a tag set, normalising, sorting and removing duplicates.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        let mut tags: SmallVec<[String; 6]> = tags
            .into_iter()
            .map(|tag| normalize_industry(&tag))
            .filter(|tag| !tag.is_empty())
            .collect();

        tags.sort();
        tags.dedup();

        Self { tags }
    }

    /// Create a tag set from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(tags.iter().map(ToString::to_string))
    }

    /// An empty set; services without industry restriction carry this.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the set contains `industry`, ignoring case and surrounding whitespace.
    pub fn contains(&self, industry: &str) -> bool {
        self.tags.binary_search(&normalize_industry(industry)).is_ok()
    }

    /// Whether the set has no industries.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of industries in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate the industries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Copy the industries out as owned strings.
    #[must_use]
    pub fn to_strs(&self) -> Vec<String> {
        self.tags.to_vec()
    }
}
