//! Listing page state: selected category, search term and visible posts.

use blog_posts::{PageContext, PostView, RawPostRecord, adapt_posts, filter_by_title};
use serde::Serialize;

use crate::layout::{TabGeometry, compute_centering_offset};
use crate::navigator::{Navigator, category_path};

/// One entry of the category tab strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
    pub path: String,
    pub is_selected: bool,
}

/// State of one listing page instance.
///
/// Posts are adapted once on construction. Changing category never touches
/// local state: it asks the [`Navigator`] for a new page, which builds a new
/// controller. Only the search term changes in place, and every change
/// recomputes [`visible_posts`](Self::visible_posts) from the full post list.
#[derive(Debug)]
pub struct ListingController {
    categories: Vec<String>,
    selected_index: usize,
    posts: Vec<PostView>,
    search_term: String,
    visible_posts: Vec<PostView>,
    centered: bool,
}

impl ListingController {
    /// Create the controller for the page showing `current_category`.
    ///
    /// # Panics
    ///
    /// Panics if `current_category` is not one of `categories`. The category
    /// list and the current category come from the same build step, so a
    /// mismatch is a pipeline bug.
    #[must_use]
    pub fn new(
        categories: Vec<String>,
        current_category: &str,
        records: &[RawPostRecord],
    ) -> Self {
        let selected_index = categories
            .iter()
            .position(|c| c == current_category)
            .unwrap_or_else(|| {
                panic!("current category '{current_category}' is not in {categories:?}")
            });
        let posts = adapt_posts(records);
        let visible_posts = posts.clone();

        Self {
            categories,
            selected_index,
            posts,
            search_term: String::new(),
            visible_posts,
            centered: false,
        }
    }

    /// Create the controller from a loaded page context.
    #[must_use]
    pub fn from_context(context: &PageContext) -> Self {
        Self::new(
            context.categories.clone(),
            &context.current_category,
            &context.edges,
        )
    }

    /// Ask `navigator` to open the page for the category at `index`.
    ///
    /// The controller itself is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn select_category(&self, index: usize, navigator: &dyn Navigator) {
        let path = category_path(&self.categories, index);
        tracing::debug!(index, path = %path, "Navigating to category");
        navigator.go_to(&path);
    }

    /// Replace the search term and recompute the visible posts.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.visible_posts = filter_by_title(&self.posts, &self.search_term);
        tracing::debug!(
            term = %self.search_term,
            visible = self.visible_posts.len(),
            total = self.posts.len(),
            "Search term updated"
        );
    }

    /// Post-layout callback for the tab strip.
    ///
    /// Returns the scroll offset centering the selected tab on the first
    /// call and `None` afterwards, so re-renders never move the strip.
    ///
    /// # Panics
    ///
    /// Panics on the first call if `tabs` has no entry for the selected
    /// category.
    pub fn on_layout(&mut self, tabs: &[TabGeometry], container_width: f64) -> Option<f64> {
        if self.centered {
            return None;
        }
        self.centered = true;
        Some(compute_centering_offset(
            self.selected_index,
            tabs,
            container_width,
        ))
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_category(&self) -> &str {
        &self.categories[self.selected_index]
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Every post of the current category, ignoring the search term.
    pub fn posts(&self) -> &[PostView] {
        &self.posts
    }

    pub fn visible_posts(&self) -> &[PostView] {
        &self.visible_posts
    }

    /// Tab strip entries in category order.
    pub fn tabs(&self) -> Vec<Tab> {
        (0..self.categories.len())
            .map(|index| Tab {
                label: self.categories[index].clone(),
                path: category_path(&self.categories, index),
                is_selected: index == self.selected_index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::RecordingNavigator;
    use crate::layout::tabs_from_widths;

    fn categories() -> Vec<String> {
        ["all", "tech", "life"].map(str::to_owned).to_vec()
    }

    fn records() -> Vec<RawPostRecord> {
        vec![
            RawPostRecord::new("Intro to Hooks", "tech"),
            RawPostRecord::new("My Daily Life", "tech"),
            RawPostRecord::new("React Tips", "tech"),
        ]
    }

    fn controller() -> ListingController {
        ListingController::new(categories(), "tech", &records())
    }

    fn visible_titles(controller: &ListingController) -> Vec<&str> {
        controller
            .visible_posts()
            .iter()
            .map(|p| p.title.as_str())
            .collect()
    }

    #[test]
    fn test_new_selects_current_category() {
        let controller = controller();
        assert_eq!(controller.selected_index(), 1);
        assert_eq!(controller.selected_category(), "tech");
        assert_eq!(controller.search_term(), "");
    }

    #[test]
    fn test_new_shows_all_posts() {
        let controller = controller();
        assert_eq!(controller.visible_posts(), controller.posts());
        assert_eq!(controller.posts().len(), 3);
    }

    #[test]
    #[should_panic(expected = "not in")]
    fn test_new_unknown_category_panics() {
        let _ = ListingController::new(categories(), "music", &records());
    }

    #[test]
    fn test_from_context() {
        let context = PageContext {
            categories: categories(),
            current_category: "life".to_owned(),
            edges: records(),
        };
        let controller = ListingController::from_context(&context);
        assert_eq!(controller.selected_index(), 2);
        assert_eq!(controller.posts().len(), 3);
    }

    #[test]
    fn test_search_re() {
        let mut controller = controller();
        controller.set_search_term("re");
        assert_eq!(visible_titles(&controller), vec!["React Tips"]);
    }

    #[test]
    fn test_search_life() {
        let mut controller = controller();
        controller.set_search_term("life");
        assert_eq!(visible_titles(&controller), vec!["My Daily Life"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut once = controller();
        once.set_search_term("i");

        let mut twice = controller();
        twice.set_search_term("i");
        twice.set_search_term("i");

        assert_eq!(once.visible_posts(), twice.visible_posts());
        assert_eq!(
            visible_titles(&twice),
            vec!["Intro to Hooks", "My Daily Life", "React Tips"]
        );
    }

    #[test]
    fn test_search_recomputes_from_all_posts() {
        let mut controller = controller();
        controller.set_search_term("react");
        assert_eq!(visible_titles(&controller), vec!["React Tips"]);

        controller.set_search_term("hooks");
        assert_eq!(visible_titles(&controller), vec!["Intro to Hooks"]);

        controller.set_search_term("");
        assert_eq!(controller.visible_posts(), controller.posts());
    }

    #[test]
    fn test_search_matches_definition_for_many_terms() {
        let mut controller = controller();
        for term in ["", "o", "IN", "tips", "x", " ", "my d", "hooks!"] {
            controller.set_search_term(term);
            let expected: Vec<&str> = controller
                .posts()
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&term.to_lowercase()))
                .map(|p| p.title.as_str())
                .collect();
            assert_eq!(visible_titles(&controller), expected, "term {term:?}");
        }
    }

    #[test]
    fn test_select_category_zero_goes_to_posts() {
        let controller = controller();
        let navigator = RecordingNavigator::new();
        controller.select_category(0, &navigator);
        assert_eq!(navigator.last(), Some("/posts".to_owned()));
    }

    #[test]
    fn test_select_category_named() {
        let controller = controller();
        let navigator = RecordingNavigator::new();
        controller.select_category(2, &navigator);
        controller.select_category(1, &navigator);
        assert_eq!(navigator.visited(), vec!["/posts/life", "/posts/tech"]);
    }

    #[test]
    fn test_select_category_keeps_state() {
        let mut controller = controller();
        controller.set_search_term("re");
        controller.select_category(2, &RecordingNavigator::new());
        assert_eq!(controller.selected_index(), 1);
        assert_eq!(visible_titles(&controller), vec!["React Tips"]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_category_out_of_range() {
        controller().select_category(3, &RecordingNavigator::new());
    }

    #[test]
    fn test_on_layout_runs_once() {
        let mut controller = controller();
        let tabs = [TabGeometry::new(0.0, 100.0), TabGeometry::new(100.0, 50.0)];

        let first = controller.on_layout(&tabs, 300.0);
        assert!(first.is_some_and(|offset| (offset - -25.0).abs() < f64::EPSILON));

        assert_eq!(controller.on_layout(&tabs, 300.0), None);
        assert_eq!(controller.on_layout(&tabs_from_widths(&[1.0; 3]), 10.0), None);
    }

    #[test]
    fn test_tabs() {
        let tabs = controller().tabs();
        assert_eq!(
            tabs,
            vec![
                Tab {
                    label: "all".to_owned(),
                    path: "/posts".to_owned(),
                    is_selected: false,
                },
                Tab {
                    label: "tech".to_owned(),
                    path: "/posts/tech".to_owned(),
                    is_selected: true,
                },
                Tab {
                    label: "life".to_owned(),
                    path: "/posts/life".to_owned(),
                    is_selected: false,
                },
            ]
        );
    }
}
