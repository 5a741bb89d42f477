//! Page context written by the build pipeline for each listing page.
//!
//! A context names the full category sequence, the category this page
//! shows, and the posts already scoped to it:
//!
//! ```json
//! {
//!   "categories": ["All", "tech", "life"],
//!   "currentCategory": "tech",
//!   "edges": [{ "node": { "frontmatter": { "title": "React Tips", "category": "tech" } } }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::RawPostRecord;

/// Inputs for one listing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Ordered categories; index 0 means "all posts".
    pub categories: Vec<String>,
    pub current_category: String,
    #[serde(default)]
    pub edges: Vec<RawPostRecord>,
}

/// Error loading a page context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("Invalid page context: {0}")]
    Parse(#[from] serde_json::Error),
    /// The category list is empty.
    #[error("Page context has no categories")]
    NoCategories,
    /// `currentCategory` is not one of `categories`.
    #[error("Current category '{0}' is not in the category list")]
    UnknownCategory(String),
}

impl PageContext {
    /// Parse and validate a context from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Parse` for malformed JSON, and
    /// `NoCategories` / `UnknownCategory` when the category data is inconsistent.
    pub fn from_json(content: &str) -> Result<Self, ContextError> {
        let context: Self = serde_json::from_str(content)?;
        context.validate()?;
        Ok(context)
    }

    /// Read a context file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Io` if the file cannot be read, otherwise as
    /// [`PageContext::from_json`].
    pub fn load(path: &Path) -> Result<Self, ContextError> {
        let content = std::fs::read_to_string(path)?;
        let context = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            category = %context.current_category,
            posts = context.edges.len(),
            "Loaded page context"
        );
        Ok(context)
    }

    /// Index of the current category within `categories`.
    #[must_use]
    pub fn current_tab_index(&self) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| *c == self.current_category)
    }

    fn validate(&self) -> Result<(), ContextError> {
        if self.categories.is_empty() {
            return Err(ContextError::NoCategories);
        }
        if self.current_tab_index().is_none() {
            return Err(ContextError::UnknownCategory(self.current_category.clone()));
        }
        Ok(())
    }
}
