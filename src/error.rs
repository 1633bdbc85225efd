//! Crate error types.

use thiserror::Error;

/// Status and body of the HTTP response behind a [`Error::Service`] failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDetails {
    /// HTTP status code of the response.
    pub status: u16,
    /// Content type reported by the service, if any.
    pub content_type: Option<String>,
    /// Raw response body, decoded lossily as UTF-8.
    pub body: String,
}

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration. Fatal: the caller must fix the
    /// configuration before the client can be used.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A synthesis request that failed: the transport gave up, the service
    /// answered with an unexpected status, or it answered 2xx with a
    /// textual error body instead of audio.
    #[error("request to {url} failed: {cause}{}", format_details(.details))]
    Service {
        /// The exact URL that was attempted.
        url: String,
        /// Human-readable cause; for service-reported errors this is the
        /// response body text.
        cause: String,
        /// The offending response, when one was received at all.
        details: Option<ResponseDetails>,
    },
}

fn format_details(details: &Option<ResponseDetails>) -> String {
    match details {
        Some(d) => format!(" (status {})", d.status),
        None => String::new(),
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub fn service(url: impl Into<String>, cause: impl Into<String>) -> Self {
        Error::Service {
            url: url.into(),
            cause: cause.into(),
            details: None,
        }
    }

    pub fn service_with_details(
        url: impl Into<String>,
        cause: impl Into<String>,
        details: ResponseDetails,
    ) -> Self {
        Error::Service {
            url: url.into(),
            cause: cause.into(),
            details: Some(details),
        }
    }

    /// URL of the failed request, when the error originated from one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Service { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display_includes_url_and_cause() {
        let err = Error::service("http://example.com/tts/gen.php?TXT=hi", "Invalid account");
        let message = err.to_string();
        assert!(message.contains("http://example.com/tts/gen.php?TXT=hi"));
        assert!(message.contains("Invalid account"));
    }

    #[test]
    fn service_error_display_includes_status() {
        let err = Error::service_with_details(
            "http://example.com/tts/gen.php",
            "unexpected response status",
            ResponseDetails {
                status: 500,
                content_type: Some("text/plain".to_string()),
                body: "boom".to_string(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("unexpected response status"));
        assert!(message.contains("status 500"));
    }

    #[test]
    fn url_accessor_only_set_for_service_errors() {
        let err = Error::service("http://example.com/", "refused");
        assert_eq!(err.url(), Some("http://example.com/"));
        assert_eq!(Error::configuration("missing").url(), None);
    }
}
