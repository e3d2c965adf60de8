//! Literal base-URL substitution.

/// Replaces every occurrence of `local_base` in `url` with `production_base`.
///
/// This is a textual substitution: no parsing or normalization happens, so
/// the result is exactly the probed URL with its host prefix swapped. When
/// `local_base` does not occur in `url` (or is empty) the URL is returned
/// unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     rewrite(
///         "https://staging.example.com/img/a.png",
///         "https://staging.example.com",
///         "https://www.example.com",
///     ),
///     "https://www.example.com/img/a.png"
/// );
/// ```
pub fn rewrite(url: &str, local_base: &str, production_base: &str) -> String {
    if local_base.is_empty() || !url.contains(local_base) {
        return url.to_string();
    }

    url.replace(local_base, production_base)
}
