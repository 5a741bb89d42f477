//! `blog posts` command implementation.

use blog_listing::{ListingController, Navigator};
use blog_posts::post_count_label;
use clap::Args;

use super::ListingArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the posts command.
#[derive(Args)]
pub(crate) struct PostsArgs {
    #[command(flatten)]
    listing: ListingArgs,

    /// Category tab to select; prints the page it navigates to.
    #[arg(long)]
    select: Option<usize>,
}

impl PostsArgs {
    /// Execute the posts command.
    ///
    /// # Errors
    ///
    /// Returns an error if the page context cannot be loaded or `--select`
    /// is out of range.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let listing = self.listing.load()?;

        output.highlight(&format!(
            "{} ({})",
            listing.selected_category(),
            post_count_label(listing.posts().len())
        ));
        if !listing.search_term().is_empty() {
            output.info(&format!(
                "Search \"{}\": {} of {} shown",
                listing.search_term(),
                listing.visible_posts().len(),
                listing.posts().len()
            ));
        }

        for post in listing.visible_posts() {
            output.result(&post.title);
            let detail = [post.date.as_str(), post.category.as_str(), post.slug.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("  ");
            if !detail.is_empty() {
                output.result_dim(&format!("  {detail}"));
            }
        }

        if let Some(index) = self.select {
            select(&listing, index, &OutputNavigator { output: &output })?;
        }

        Ok(())
    }
}

/// Validate `index` and hand it to the controller.
fn select(
    listing: &ListingController,
    index: usize,
    navigator: &dyn Navigator,
) -> Result<(), CliError> {
    let count = listing.categories().len();
    if index >= count {
        return Err(CliError::Validation(format!(
            "--select {index} is out of range ({count} categories)"
        )));
    }
    listing.select_category(index, navigator);
    Ok(())
}

/// Navigator that reports the requested page on the terminal.
struct OutputNavigator<'a> {
    output: &'a Output,
}

impl Navigator for OutputNavigator<'_> {
    fn go_to(&self, path: &str) {
        self.output.success(&format!("Navigate to {path}"));
    }
}

#[cfg(test)]
mod tests {
    use blog_listing::RecordingNavigator;
    use blog_posts::RawPostRecord;

    use super::*;

    fn listing() -> ListingController {
        ListingController::new(
            vec!["all".to_owned(), "tech".to_owned()],
            "all",
            &[RawPostRecord::new("React Tips", "tech")],
        )
    }

    #[test]
    fn test_select_in_range_navigates() {
        let navigator = RecordingNavigator::new();
        select(&listing(), 1, &navigator).unwrap();
        assert_eq!(navigator.visited(), vec!["/posts/tech"]);
    }

    #[test]
    fn test_select_out_of_range_is_error() {
        let navigator = RecordingNavigator::new();
        let err = select(&listing(), 2, &navigator).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("out of range"));
        assert!(navigator.visited().is_empty());
    }
}
