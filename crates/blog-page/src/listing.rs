//! Static HTML for a post listing page.
//!
//! Layout: header with the theme toggle, category title with the post count
//! and search box, the category tab strip, one card per visible post, then a
//! footer with the author's social links.

use std::fmt::Write;

use blog_config::Config;
use blog_listing::{ListingController, Tab};
use blog_posts::{PostView, post_count_label};

use crate::html::escape;
use crate::seo::{SeoProps, render_head};
use crate::theme::Theme;

/// Placeholder text of the search box.
const SEARCH_PLACEHOLDER: &str = "Please enter your search term";

/// Everything needed to render one listing page.
pub struct ListingPage<'a> {
    pub config: &'a Config,
    pub listing: &'a ListingController,
    pub theme: Theme,
}

/// Render a complete listing page.
pub fn render_listing_page(page: &ListingPage<'_>) -> String {
    let config = page.config;
    let listing = page.listing;
    let mut html = String::with_capacity(8192);

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(
        html,
        "<html lang=\"{}\" data-theme=\"{}\">",
        escape(&config.site.language),
        page.theme
    );
    let seo = SeoProps::new(format!("{} | Posts", config.site.title));
    html.push_str(&render_head(config, &seo));
    html.push_str("<body>\n");

    render_header(&mut html, config, page.theme);

    html.push_str("<main>\n");
    render_category_header(&mut html, listing);

    html.push_str("<div class=\"tab-wrapper\">\n");
    render_tabs(&mut html, &listing.tabs(), listing.selected_index());
    render_post_cards(&mut html, listing.visible_posts(), listing.search_term());
    html.push_str("</div>\n");

    html.push_str("</main>\n");

    render_footer(&mut html, config);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, config: &Config, theme: Theme) {
    html.push_str("<header class=\"header\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"site-title\">{}</a>",
        escape(&config.site.title)
    );
    let _ = writeln!(
        html,
        "<button type=\"button\" class=\"theme-toggle\" data-theme=\"{}\" \
         data-icon=\"{}\" aria-label=\"Switch to {} theme\"></button>",
        theme,
        theme.toggle_icon(),
        theme.toggle()
    );
    html.push_str("</header>\n");
}

fn render_footer(html: &mut String, config: &Config) {
    let author = &config.author;
    if author.name.is_empty() && author.social.links().next().is_none() {
        return;
    }
    html.push_str("<footer class=\"footer\">\n");
    if !author.name.is_empty() {
        let _ = writeln!(html, "<p class=\"author\">{}</p>", escape(&author.name));
    }
    html.push_str("<ul class=\"social\">");
    for (network, url) in author.social.links() {
        let _ = write!(
            html,
            "<li><a href=\"{}\" class=\"{network}\" rel=\"noopener\">{network}</a></li>",
            escape(url)
        );
    }
    html.push_str("</ul>\n</footer>\n");
}

fn render_category_header(html: &mut String, listing: &ListingController) {
    html.push_str("<section class=\"category\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"category-title\">{}</h1>",
        escape(listing.selected_category())
    );
    let _ = writeln!(
        html,
        "<p class=\"category-subtitle\">{}</p>",
        post_count_label(listing.posts().len())
    );
    let _ = writeln!(
        html,
        "<input type=\"text\" class=\"search-input\" placeholder=\"{}\" value=\"{}\">",
        SEARCH_PLACEHOLDER,
        escape(listing.search_term())
    );
    html.push_str("</section>\n");
}

/// Tab strip. The selected index is exposed so the client can center it
/// once layout is known.
fn render_tabs(html: &mut String, tabs: &[Tab], selected_index: usize) {
    let _ = writeln!(
        html,
        "<nav class=\"tabs\" data-selected-index=\"{selected_index}\">"
    );
    for tab in tabs {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"tab\" aria-selected=\"{}\">{}</a>",
            escape(&tab.path),
            tab.is_selected,
            escape(&tab.label)
        );
    }
    html.push_str("</nav>\n");
}

fn render_post_cards(html: &mut String, posts: &[PostView], search_term: &str) {
    html.push_str("<div class=\"post-cards\">\n");
    if posts.is_empty() && !search_term.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"empty\">No posts matching \"{}\"</p>",
            escape(search_term)
        );
    }
    for post in posts {
        render_post_card(html, post);
    }
    html.push_str("</div>\n");
}

fn render_post_card(html: &mut String, post: &PostView) {
    html.push_str("<article class=\"post-card\">\n");
    let _ = writeln!(html, "<a href=\"{}\">", escape(&post.slug));
    if let Some(thumbnail) = &post.thumbnail {
        let _ = writeln!(
            html,
            "<img class=\"thumbnail\" src=\"{}\" alt=\"\">",
            escape(thumbnail)
        );
    }
    let _ = writeln!(html, "<h2 class=\"title\">{}</h2>", escape(&post.title));
    if !post.description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"description\">{}</p>",
            escape(&post.description)
        );
    }
    if !post.date.is_empty() {
        let _ = writeln!(html, "<time>{}</time>", escape(&post.date));
    }
    html.push_str("<ul class=\"categories\">");
    for category in &post.categories {
        let _ = write!(html, "<li>{}</li>", escape(category));
    }
    html.push_str("</ul>\n</a>\n</article>\n");
}
