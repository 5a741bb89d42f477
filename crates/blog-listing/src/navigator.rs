//! Navigation capability and listing routes.

/// Base path of the listing pages.
pub const POSTS_PATH: &str = "/posts";

/// Something that can move the reader to another page.
///
/// Implemented by the hosting surface (router, CLI, test recorder) so the
/// listing logic never depends on a concrete router.
pub trait Navigator {
    /// Request navigation to `path`.
    fn go_to(&self, path: &str);
}

/// Route for the category at `index`.
///
/// Index 0 is "all posts" and maps to `/posts`; every other category maps to
/// `/posts/{label}`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn category_path(categories: &[String], index: usize) -> String {
    assert!(
        index < categories.len(),
        "category index {index} out of range for {} categories",
        categories.len()
    );
    if index == 0 {
        POSTS_PATH.to_owned()
    } else {
        format!("{POSTS_PATH}/{}", categories[index])
    }
}
