//! Error taxonomy for calls against the collection endpoint.

use thiserror::Error;

use crate::ErrorEnvelope;

/// A failed API call.
///
/// All failures are terminal for the triggering action only: the caller keeps
/// its local state and surfaces a single notification.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response carrying an `{error}` body. The message is the
    /// server's own and is surfaced verbatim.
    #[error("{0}")]
    Server(String),

    /// Non-2xx response without a usable error body.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The request never completed, or a success body failed to decode.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-2xx response, preferring the server-reported message.
    pub(crate) async fn from_failure(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match parse_error_message(&body) {
            Some(message) => ApiError::Server(message),
            None => ApiError::Status(status),
        }
    }

    /// The text to surface to the user: the server's own message when one was
    /// reported, the caller's generic fallback otherwise.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Server(message) => message,
            _ => fallback,
        }
    }
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_yields_server_message_verbatim() {
        assert_eq!(
            parse_error_message(r#"{"error":"not found"}"#).as_deref(),
            Some("not found")
        );
    }

    #[test]
    fn non_json_or_shapeless_bodies_yield_nothing() {
        assert!(parse_error_message("").is_none());
        assert!(parse_error_message("<html>502</html>").is_none());
        assert!(parse_error_message(r#"{"message":"nope"}"#).is_none());
    }

    #[test]
    fn user_message_prefers_server_text_over_fallback() {
        let err = ApiError::Server("not found".to_string());
        assert_eq!(err.user_message("Error deleting user."), "not found");

        let err = ApiError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.user_message("Error deleting user."),
            "Error deleting user."
        );
    }

    #[test]
    fn display_matches_what_the_user_sees_for_server_errors() {
        let err = ApiError::Server("email already taken".to_string());
        assert_eq!(err.to_string(), "email already taken");
    }
}
