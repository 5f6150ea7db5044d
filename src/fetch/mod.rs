//! Page fetching.
//!
//! One GET request per lookup: the URL is normalized, the request is sent with
//! the client's timeout, non-success statuses are turned into errors, and the
//! body is decoded to text. Failures are categorized for logging and returned
//! as [`FetchError`]; nothing is retried.

use log::{debug, warn};

use crate::app::normalize_url;
use crate::error_handling::FetchError;

/// Fetches the HTML of a page.
///
/// `raw_url` is normalized with [`normalize_url`] first, so `example.com`
/// requests `http://example.com`. Redirects follow the client's default
/// policy; the status checked is the one of the final response.
///
/// # Errors
///
/// Returns a [`FetchError`] for an unparseable URL, DNS or connection
/// failure, timeout, a 4xx/5xx status, or a body that cannot be read.
pub async fn fetch_html(client: &reqwest::Client, raw_url: &str) -> Result<String, FetchError> {
    let url = normalize_url(raw_url);
    debug!("Fetching {url}");

    let result = send(client, &url).await;
    if let Err(ref e) = result {
        warn!("Fetch of {url} failed ({}): {}", e.kind().as_str(), e.cause());
    }
    result
}

async fn send(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!(
        "Received {} from {} ({} bytes announced)",
        status,
        response.url(),
        response
            .content_length()
            .map_or_else(|| "unknown".to_string(), |len| len.to_string())
    );

    let response = response.error_for_status()?;
    let body = response.text().await?;
    debug!("Read {} bytes of body from {url}", body.len());
    Ok(body)
}
