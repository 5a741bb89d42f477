//! Read-only post views used for rendering and filtering.

use serde::Serialize;

use crate::record::RawPostRecord;

/// Normalized view of one post.
///
/// Built once per [`RawPostRecord`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Category string as written in front matter.
    pub category: String,
    /// `category` split on whitespace.
    pub categories: Vec<String>,
    pub date: String,
    /// Front matter `desc`, or the excerpt when `desc` is empty.
    pub description: String,
    pub thumbnail: Option<String>,
}

impl PostView {
    /// Whether the title contains `needle` ignoring case.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn title_contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

impl From<&RawPostRecord> for PostView {
    fn from(record: &RawPostRecord) -> Self {
        let node = &record.node;
        let fm = &node.frontmatter;
        let description = if fm.desc.is_empty() {
            node.excerpt.clone()
        } else {
            fm.desc.clone()
        };

        Self {
            id: node.id.clone(),
            slug: node.fields.slug.clone(),
            title: fm.title.clone(),
            category: fm.category.clone(),
            categories: fm.category.split_whitespace().map(str::to_owned).collect(),
            date: fm.date.clone(),
            description,
            thumbnail: fm.thumbnail.clone(),
        }
    }
}

/// Convert raw records to post views, one-to-one and in input order.
///
/// Category scoping has already been applied by the content pipeline, so
/// nothing is dropped here.
#[must_use]
pub fn adapt_posts(records: &[RawPostRecord]) -> Vec<PostView> {
    records.iter().map(PostView::from).collect()
}

/// Keep the posts whose title contains `term`, case-insensitively.
///
/// An empty term keeps every post. Order is preserved.
#[must_use]
pub fn filter_by_title(posts: &[PostView], term: &str) -> Vec<PostView> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title_contains_lowercase(&needle))
        .cloned()
        .collect()
}

/// Subtitle shown under the category title: `1 post`, `3 posts`.
#[must_use]
pub fn post_count_label(count: usize) -> String {
    if count == 1 {
        format!("{count} post")
    } else {
        format!("{count} posts")
    }
}
