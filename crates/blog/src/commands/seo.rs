//! `blog seo` command implementation.

use std::path::Path;

use blog_config::{CliSettings, Config};
use blog_page::{SeoProps, meta_tags};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the seo command.
#[derive(Args)]
pub(crate) struct SeoArgs {
    /// Page title (default: site title).
    #[arg(short, long, default_value = "")]
    title: String,

    /// Page description (default: site description).
    #[arg(short, long)]
    description: Option<String>,

    /// Canonical site URL (overrides config).
    #[arg(long, env = "BLOG_SITE_URL")]
    site_url: Option<String>,
}

impl SeoArgs {
    /// Execute the seo command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            site_url: self.site_url,
        };
        let config = Config::load(config_path, Some(&settings))?;

        let props = SeoProps {
            title: self.title,
            description: self.description,
        };
        for tag in meta_tags(&config, &props) {
            output.result(&tag.to_html());
        }

        Ok(())
    }
}
