//! Cheap syntactic check applied to every candidate before resolution.

use url::Url;

/// Returns `true` when `input` is a syntactically valid absolute URL with a host.
///
/// Values containing whitespace are rejected outright, even though
/// [`Url::parse`] would silently trim leading and trailing spaces.
pub fn is_absolute_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }

    Url::parse(input)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(is_absolute_url("https://staging.example.com/img/a.png"));
        assert!(is_absolute_url("http://localhost:8080/a.png"));
        assert!(is_absolute_url("ftp://files.example.com/a.png"));
    }

    #[test]
    fn test_rejects_non_urls() {
        assert!(!is_absolute_url("not a url"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("/wp-content/uploads/a.png"));
        assert!(!is_absolute_url("a.png"));
    }

    #[test]
    fn test_rejects_urls_without_host() {
        assert!(!is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_rejects_padded_input() {
        assert!(!is_absolute_url(" https://example.com/a.png"));
        assert!(!is_absolute_url("https://example.com/a b.png"));
    }
}
