//! `${VAR}` expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` references in a config value.
///
/// `${VAR}` fails when VAR is unset, `${VAR:-default}` falls back to the
/// default. Any other `$` is kept literally, so `https://host/$path` stays
/// as written even next to a `${VAR}` reference.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    shellexpand::env_with_context(&escaped, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

fn lookup(var: &str) -> Result<Option<String>, std::env::VarError> {
    std::env::var(var).map(Some)
}

/// Double every `$` that does not open a `${...}` reference.
///
/// shellexpand reads `$$` as a literal `$` and would otherwise expand bare
/// `$NAME` as well.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        escaped.push(c);
        if c == '$' && chars.peek() != Some(&'{') {
            escaped.push('$');
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_site_url_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BLOG_TEST_DOMAIN", "hooninedev.com");
        }
        let result = expand_env("https://${BLOG_TEST_DOMAIN}/", "site.site_url").unwrap();
        assert_eq!(result, "https://hooninedev.com/");
        unsafe {
            std::env::remove_var("BLOG_TEST_DOMAIN");
        }
    }

    #[test]
    fn test_expand_falls_back_to_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BLOG_TEST_UNSET_IMAGE");
        }
        let result = expand_env("${BLOG_TEST_UNSET_IMAGE:-/og-image.png}", "site.og_image").unwrap();
        assert_eq!(result, "/og-image.png");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BLOG_TEST_MISSING_IMAGE");
        }
        let err = expand_env("${BLOG_TEST_MISSING_IMAGE}", "site.og_image").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("BLOG_TEST_MISSING_IMAGE"));
        assert!(err.to_string().contains("site.og_image"));
    }

    #[test]
    fn test_bare_dollar_without_reference() {
        let result = expand_env("https://example.com/$path", "site.site_url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BLOG_TEST_HOST", "hooninedev.com");
            std::env::set_var("BLOG_TEST_PAGE", "expanded");
        }
        let result = expand_env("https://${BLOG_TEST_HOST}/$BLOG_TEST_PAGE/$", "site.site_url").unwrap();
        assert_eq!(result, "https://hooninedev.com/$BLOG_TEST_PAGE/$");
        unsafe {
            std::env::remove_var("BLOG_TEST_HOST");
            std::env::remove_var("BLOG_TEST_PAGE");
        }
    }

    #[test]
    fn test_escape_bare_dollars() {
        assert_eq!(escape_bare_dollars("${A}/$B"), "${A}/$$B");
        assert_eq!(escape_bare_dollars("a$$b"), "a$$$$b");
        assert_eq!(escape_bare_dollars("end$"), "end$$");
    }
}
