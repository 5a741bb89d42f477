//! SEO meta tags for page heads.
//!
//! Tags come out in a fixed order: Open Graph title and site title, plain
//! description, Open Graph description, the author's name and nickname,
//! the Open Graph image and type.

use std::fmt::Write;

use blog_config::Config;
use serde::Serialize;

use crate::html::escape;

/// Per-page SEO input.
#[derive(Clone, Debug, Default)]
pub struct SeoProps {
    /// Page title; the site title is used when empty.
    pub title: String,
    /// Page description; the site description is used when absent or empty.
    pub description: Option<String>,
}

impl SeoProps {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Which attribute names the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

/// One `<meta>` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub key_value: String,
    pub content: String,
}

impl MetaTag {
    fn property(property: &str, content: &str) -> Self {
        Self {
            key: MetaKey::Property,
            key_value: property.to_owned(),
            content: content.to_owned(),
        }
    }

    fn name(name: &str, content: &str) -> Self {
        Self {
            key: MetaKey::Name,
            key_value: name.to_owned(),
            content: content.to_owned(),
        }
    }

    /// Render as a single `<meta>` element.
    #[must_use]
    pub fn to_html(&self) -> String {
        let attr = match self.key {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        };
        format!(
            "<meta {attr}=\"{}\" content=\"{}\">",
            escape(&self.key_value),
            escape(&self.content)
        )
    }
}

/// Title actually used for the page.
#[must_use]
pub fn resolve_title<'a>(config: &'a Config, props: &'a SeoProps) -> &'a str {
    if props.title.is_empty() {
        config.site.title.as_str()
    } else {
        props.title.as_str()
    }
}

fn resolve_description<'a>(config: &'a Config, props: &'a SeoProps) -> &'a str {
    props
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(config.site.description.as_str())
}

/// Meta tags for a page.
#[must_use]
pub fn meta_tags(config: &Config, props: &SeoProps) -> Vec<MetaTag> {
    let title = resolve_title(config, props);
    let description = resolve_description(config, props);
    let og_image = config.og_image_url();

    vec![
        MetaTag::property("og:title", title),
        MetaTag::property("og:site_title", title),
        MetaTag::name("description", description),
        MetaTag::property("og:description", description),
        MetaTag::property("og:author", &config.author.name),
        MetaTag::property("og:author", &config.author.nickname),
        MetaTag::property("og:image", &og_image),
        MetaTag::property("og:type", "website"),
    ]
}

/// Render the `<head>` element: charset, viewport, title and meta tags.
#[must_use]
pub fn render_head(config: &Config, props: &SeoProps) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{}</title>",
        escape(resolve_title(config, props))
    );
    for tag in meta_tags(config, props) {
        html.push_str(&tag.to_html());
        html.push('\n');
    }
    html.push_str("</head>\n");
    html
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.site.title = "hooninedev.com".to_owned();
        config.site.description = "후니네".to_owned();
        config.site.site_url = "https://hooninedev.com/".to_owned();
        config.author.name = "이지훈".to_owned();
        config.author.nickname = "후니".to_owned();
        config
    }

    fn pairs(tags: &[MetaTag]) -> Vec<(&str, &str)> {
        tags.iter()
            .map(|t| (t.key_value.as_str(), t.content.as_str()))
            .collect()
    }

    #[test]
    fn test_meta_tags_order_and_content() {
        let tags = meta_tags(&config(), &SeoProps::new("Posts").with_description("All posts"));
        assert_eq!(
            pairs(&tags),
            vec![
                ("og:title", "Posts"),
                ("og:site_title", "Posts"),
                ("description", "All posts"),
                ("og:description", "All posts"),
                ("og:author", "이지훈"),
                ("og:author", "후니"),
                ("og:image", "https://hooninedev.com/og-image.png"),
                ("og:type", "website"),
            ]
        );
        assert_eq!(tags[2].key, MetaKey::Name);
        assert!(
            tags.iter()
                .enumerate()
                .all(|(i, t)| i == 2 || t.key == MetaKey::Property)
        );
    }

    #[test]
    fn test_meta_tags_fall_back_to_site() {
        let tags = meta_tags(&config(), &SeoProps::default());
        assert_eq!(tags[0].content, "hooninedev.com");
        assert_eq!(tags[2].content, "후니네");
    }

    #[test]
    fn test_empty_description_falls_back() {
        let tags = meta_tags(&config(), &SeoProps::new("About").with_description(""));
        assert_eq!(tags[3].content, "후니네");
    }

    #[test]
    fn test_meta_tag_html() {
        let tag = MetaTag::name("description", "Tips & \"tricks\"");
        assert_eq!(
            tag.to_html(),
            "<meta name=\"description\" content=\"Tips &amp; &quot;tricks&quot;\">"
        );
    }

    #[test]
    fn test_render_head() {
        let head = render_head(&config(), &SeoProps::new("hooninedev.com | Posts"));
        assert!(head.starts_with("<head>\n"));
        assert!(head.contains("<title>hooninedev.com | Posts</title>"));
        assert!(head.contains("<meta property=\"og:type\" content=\"website\">"));
        assert!(head.ends_with("</head>\n"));
    }
}
