//! Post records and page context for the blog.
//!
//! This crate provides:
//! - [`RawPostRecord`]: post data as written by the content pipeline
//! - [`PostView`] and [`adapt_posts`]: the normalized posts pages work with
//! - [`PageContext`]: the per-page input for listing pages
//!
//! # Quick Start
//!
//! ```
//! use blog_posts::{PageContext, adapt_posts, filter_by_title};
//!
//! let context = PageContext::from_json(r#"{
//!     "categories": ["all", "tech"],
//!     "currentCategory": "tech",
//!     "edges": [{ "node": { "frontmatter": { "title": "React Tips", "category": "tech" } } }]
//! }"#).unwrap();
//!
//! let posts = adapt_posts(&context.edges);
//! assert_eq!(filter_by_title(&posts, "REACT").len(), 1);
//! ```

mod context;
mod post;
mod record;

pub use context::{ContextError, PageContext};
pub use post::{PostView, adapt_posts, filter_by_title, post_count_label};
pub use record::{Frontmatter, PostFields, PostNode, RawPostRecord};
