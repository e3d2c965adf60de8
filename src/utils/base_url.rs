//! Base URL sanitisation for the local and production hosts.
//!
//! Base URLs are used as literal match and replacement text by the
//! [`rewrite`](crate::utils::url_rewriter::rewrite) step, so both sides must be
//! stored in the same canonical form.

use url::Url;

/// Errors that can occur while sanitising a base URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Base URL must include a host")]
    MissingHost,

    #[error("Base URL must not contain a query string or fragment")]
    UnexpectedSuffix,

    #[error("Failed to normalize base URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a base URL to the canonical form used for rewriting.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Protocol**: Only HTTP and HTTPS are allowed
/// 3. **Hostname**: Converted to lowercase
/// 4. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 5. **Trailing slash**: Removed, so `https://example.com/` and
///    `https://example.com` compare equal
/// 6. **Query / fragment**: Rejected
///
/// # Errors
///
/// See [`BaseUrlError`] for the rejected inputs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_base_url(" HTTPS://WWW.Example.com:443/ ").unwrap(),
///     "https://www.example.com"
/// );
/// ```
pub fn normalize_base_url(input: &str) -> Result<String, BaseUrlError> {
    let mut url =
        Url::parse(input.trim()).map_err(|e| BaseUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(BaseUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(BaseUrlError::MissingHost);
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(BaseUrlError::UnexpectedSuffix);
    }

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            BaseUrlError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
