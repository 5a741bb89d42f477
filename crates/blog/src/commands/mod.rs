//! CLI command implementations.

pub(crate) mod posts;
pub(crate) mod render;
pub(crate) mod seo;

use std::path::PathBuf;

use blog_listing::ListingController;
use blog_posts::PageContext;
use clap::Args;

use crate::error::CliError;

pub(crate) use posts::PostsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use seo::SeoArgs;

/// Arguments shared by commands that work on one listing page.
#[derive(Args)]
pub(crate) struct ListingArgs {
    /// Page context JSON written by the content pipeline.
    #[arg(short = 'x', long)]
    context: PathBuf,

    /// Search term applied to post titles.
    #[arg(short, long, default_value = "")]
    search: String,
}

impl ListingArgs {
    /// Load the page context and apply the search term.
    pub(crate) fn load(&self) -> Result<ListingController, CliError> {
        let context = PageContext::load(&self.context)?;
        let mut listing = ListingController::from_context(&context);
        listing.set_search_term(self.search.as_str());
        Ok(listing)
    }
}
