//! `blog render` command implementation.

use std::path::{Path, PathBuf};

use blog_config::{CliSettings, Config};
use blog_page::{ListingPage, Theme, render_listing_page};
use clap::Args;

use super::ListingArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    listing: ListingArgs,

    /// Color theme of the rendered page.
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// Canonical site URL (overrides config).
    #[arg(long, env = "BLOG_SITE_URL")]
    site_url: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page context fail to load,
    /// or the output file cannot be written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            site_url: self.site_url,
        };
        let config = Config::load(config_path, Some(&settings))?;
        let listing = self.listing.load()?;

        let html = render_listing_page(&ListingPage {
            config: &config,
            listing: &listing,
            theme: self.theme,
        });

        match self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, html)?;
                tracing::info!(path = %path.display(), "Wrote listing page");
                output.success(&format!(
                    "Rendered {} ({} of {} posts) to {}",
                    listing.selected_category(),
                    listing.visible_posts().len(),
                    listing.posts().len(),
                    path.display()
                ));
            }
            None => output.raw(&html),
        }

        Ok(())
    }
}
