//! Page output for the blog: SEO tags, color theme and listing page HTML.
//!
//! # Example
//!
//! ```ignore
//! use blog_page::{ListingPage, Theme, render_listing_page};
//!
//! let html = render_listing_page(&ListingPage {
//!     config: &config,
//!     listing: &listing,
//!     theme: Theme::Dark,
//! });
//! ```

mod html;
mod listing;
mod seo;
mod theme;

pub use listing::{ListingPage, render_listing_page};
pub use seo::{MetaKey, MetaTag, SeoProps, meta_tags, render_head, resolve_title};
pub use theme::{ParseThemeError, Theme};
