use serde::{Deserialize, Serialize};

/// Categorical tags used for similarity scoring between typefaces
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tags {
    #[serde(rename = "type")]
    pub kind: String,
    pub style: String,
}

/// A single typeface record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Sample glyphs rendered in the typeface on the question card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub tags: Tags,
}

impl Item {
    /// Number of tags shared with `other` (0-2)
    pub fn similarity(&self, other: &Item) -> u8 {
        let mut score = 0;
        if self.tags.kind == other.tags.kind {
            score += 1;
        }
        if self.tags.style == other.tags.style {
            score += 1;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_utils::item;
    use rstest::rstest;

    #[rstest]
    #[case("serif", "didone", 2)]
    #[case("serif", "old-style", 1)]
    #[case("sans-serif", "didone", 1)]
    #[case("script", "casual", 0)]
    fn scores_shared_tags(#[case] kind: &str, #[case] style: &str, #[case] expected: u8) {
        let target = item("bodoni", "serif", "didone");
        let other = item("other", kind, style);
        assert_eq!(target.similarity(&other), expected);
        assert_eq!(other.similarity(&target), expected);
    }

    #[test]
    fn deserializes_type_tag_and_optional_fields() {
        let json = r#"{
            "id": "futura",
            "name": "Futura",
            "tags": { "type": "sans-serif", "style": "geometric" }
        }"#;
        let parsed: Item = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tags.kind, "sans-serif");
        assert_eq!(parsed.year, None);
        assert!(parsed.author.is_empty());
    }
}
