//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the page fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - A whole-request timeout from the config (5 seconds by default)
/// - reqwest's default redirect policy (up to 10 hops)
///
/// No default headers or cookie store are installed.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or the
/// User-Agent value is rejected by reqwest.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        let result = init_client(&config);
        assert!(matches!(
            result,
            Err(InitializationError::HttpClientError(_))
        ));
    }
}
