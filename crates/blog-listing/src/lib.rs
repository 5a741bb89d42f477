//! Post listing state for the blog.
//!
//! This crate provides:
//! - [`ListingController`]: selected category, search term and visible posts
//! - [`Navigator`]: the capability used to move between category pages
//! - [`compute_centering_offset`]: scroll offset centering the selected tab
//! - [`RecordingNavigator`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use blog_listing::{ListingController, Navigator};
//!
//! let mut listing = ListingController::from_context(&context);
//! listing.set_search_term("react");
//! listing.select_category(0, &router); // router.go_to("/posts")
//! ```

mod controller;
mod layout;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod navigator;

pub use controller::{ListingController, Tab};
pub use layout::{TabGeometry, compute_centering_offset, tabs_from_widths};
#[cfg(any(test, feature = "mock"))]
pub use mock::RecordingNavigator;
pub use navigator::{Navigator, POSTS_PATH, category_path};
