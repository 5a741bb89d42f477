//! Site configuration for the blog.
//!
//! Parses `blog.toml` with serde and discovers it in the current directory
//! or any parent. Every section is optional; a missing file yields defaults.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! These fields support `${VAR}` and `${VAR:-default}`:
//! - `site.site_url`
//! - `site.og_image`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the canonical site URL.
    pub site_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blog.toml";

/// Blog configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Basic site information used for SEO tags and page titles.
    pub site: SiteConfig,
    /// Author shown in meta tags and the page footer.
    pub author: AuthorConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub language: String,
    /// Canonical URL, empty when unset.
    pub site_url: String,
    /// Open Graph image path relative to the static folder.
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_owned(),
            description: String::new(),
            language: "en".to_owned(),
            site_url: String::new(),
            og_image: "/og-image.png".to_owned(),
        }
    }
}

/// `[author]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub nickname: String,
    pub social: Social,
}

/// Social links. Empty strings hide the corresponding icon.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub resume: String,
}

impl Social {
    /// Non-empty links paired with their network name.
    pub fn links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("github", self.github.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("resume", self.resume.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.site_url`").
        field: String,
        /// Error message (e.g., "${`BLOG_URL`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !is_http_url(url) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blog.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the values are invalid once CLI settings are applied.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::info!(path = %discovered.display(), "Using discovered config");
            Self::load_from_file(&discovered)?
        } else {
            tracing::info!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site_url) = &settings.site_url {
            self.site.site_url.clone_from(site_url);
        }
    }

    /// Absolute Open Graph image URL when the site URL is known.
    #[must_use]
    pub fn og_image_url(&self) -> String {
        let image = &self.site.og_image;
        if self.site.site_url.is_empty() || is_http_url(image) {
            return image.clone();
        }
        format!(
            "{}/{}",
            self.site.site_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_author()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        if !self.site.site_url.is_empty() {
            require_http_url(&self.site.site_url, "site.site_url")?;
        }
        Ok(())
    }

    fn validate_author(&self) -> Result<(), ConfigError> {
        for (network, url) in self.author.social.links() {
            require_http_url(url, &format!("author.social.{network}"))?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.site_url = expand::expand_env(&self.site.site_url, "site.site_url")?;
        self.site.og_image = expand::expand_env(&self.site.og_image, "site.og_image")?;
        Ok(())
    }
}
