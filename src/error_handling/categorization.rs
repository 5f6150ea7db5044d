//! Error categorization.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a [`FetchErrorKind`].
///
/// HTTP status errors are checked first so that `error_for_status` failures
/// keep their code; the remaining checks follow reqwest's own error classes.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if let Some(status) = error.status() {
        if status.is_client_error() || status.is_server_error() {
            return FetchErrorKind::Status(status.as_u16());
        }
    }

    if error.is_builder() {
        FetchErrorKind::InvalidUrl
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    }
}
