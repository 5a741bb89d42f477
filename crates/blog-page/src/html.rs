/// Escape HTML special characters for text and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("Tips & Tricks"), "Tips &amp; Tricks");
        assert_eq!(escape("it's \"fine\""), "it&#x27;s &quot;fine&quot;");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape("후니네 개발하우스"), "후니네 개발하우스");
    }
}
