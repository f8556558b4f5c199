//! Product Tags
//!
//! Tags are kept exactly as the content backend returns them: insertion order
//! is display order and nothing is sorted or deduplicated.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Ordered collection of product tag labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTags {
    tags: SmallVec<[String; 5]>,
}

impl ProductTags {
    /// Create a tag collection from owned strings, preserving order.
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Create a tag collection from string slices, preserving order.
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(tags.iter().map(ToString::to_string))
    }

    /// Iterate over the tags in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Whether `tag` is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Copy the tags into a vector in display order.
    pub fn to_vec(&self) -> Vec<String> {
        self.tags.to_vec()
    }
}

impl<'de> Deserialize<'de> for ProductTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = Option::<Vec<String>>::deserialize(deserializer)?;

        Ok(tags.map_or_else(Self::default, Self::new))
    }
}

impl Serialize for ProductTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.tags.iter())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let tags = ProductTags::from_strs(&["zebra", "apple", "mango"]);

        assert_eq!(tags.iter().collect::<Vec<_>>(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn keeps_duplicates() {
        let tags = ProductTags::from_strs(&["sale", "sale"]);

        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn contains_matches_exact_tag() {
        let tags = ProductTags::from_strs(&["kitchen"]);

        assert!(tags.contains("kitchen"));
        assert!(!tags.contains("kitch"));
    }

    #[test]
    fn deserializes_null_as_empty() -> TestResult {
        let tags: ProductTags = serde_json::from_str("null")?;

        assert!(tags.is_empty());

        Ok(())
    }

    #[test]
    fn deserializes_array_in_order() -> TestResult {
        let tags: ProductTags = serde_json::from_str(r#"["b", "a"]"#)?;

        assert_eq!(tags.to_vec(), ["b", "a"]);

        Ok(())
    }
}
