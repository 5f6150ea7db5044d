//! URL normalization.

use crate::config::DEFAULT_SCHEME_PREFIX;

/// Normalizes a user-supplied URL.
///
/// Trims surrounding whitespace and prepends `http://` if neither `http://`
/// nor `https://` is present. Nothing else is validated: a malformed URL is
/// left for the HTTP client to reject so the failure surfaces as a fetch
/// error. Applying the function twice gives the same result as applying it
/// once.
pub fn normalize_url(raw_url: &str) -> String {
    let url = raw_url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{url}")
    }
}
