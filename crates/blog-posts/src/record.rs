//! Raw post records as written by the content pipeline.
//!
//! The pipeline emits Gatsby-style edges (`{ "node": { ... } }`). Only
//! `frontmatter.title` and `frontmatter.category` are required.

use serde::{Deserialize, Serialize};

/// One post as supplied by the content pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPostRecord {
    pub node: PostNode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: PostFields,
    pub frontmatter: Frontmatter,
    /// Plain-text excerpt generated from the post body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub excerpt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    #[serde(default)]
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    /// Space-separated category labels.
    #[serde(alias = "categories")]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl RawPostRecord {
    /// Build a record with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            node: PostNode {
                id: String::new(),
                fields: PostFields::default(),
                frontmatter: Frontmatter {
                    title: title.into(),
                    category: category.into(),
                    date: String::new(),
                    desc: String::new(),
                    thumbnail: None,
                },
                excerpt: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_minimal_edge() {
        let json = r#"{ "node": { "frontmatter": { "title": "Hello", "category": "tech" } } }"#;
        let record: RawPostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, RawPostRecord::new("Hello", "tech"));
    }

    #[test]
    fn test_parse_full_edge() {
        let json = r#"{
            "node": {
                "id": "abc-123",
                "fields": { "slug": "/react-tips/" },
                "excerpt": "Some tips",
                "frontmatter": {
                    "title": "React Tips",
                    "categories": "tech react",
                    "date": "2024-01-02",
                    "desc": "Tips for React",
                    "thumbnail": "./thumb.png"
                }
            }
        }"#;
        let record: RawPostRecord = serde_json::from_str(json).unwrap();
        let node = record.node;
        assert_eq!(node.id, "abc-123");
        assert_eq!(node.fields.slug, "/react-tips/");
        assert_eq!(node.excerpt, "Some tips");
        assert_eq!(node.frontmatter.category, "tech react");
        assert_eq!(node.frontmatter.date, "2024-01-02");
        assert_eq!(node.frontmatter.thumbnail.as_deref(), Some("./thumb.png"));
    }

    #[test]
    fn test_parse_missing_title_fails() {
        let json = r#"{ "node": { "frontmatter": { "category": "tech" } } }"#;
        assert!(serde_json::from_str::<RawPostRecord>(json).is_err());
    }
}
