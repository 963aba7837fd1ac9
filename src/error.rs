//! Error types and handling for `skycast`

use thiserror::Error;

/// Main error type for the `skycast` application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Input validation errors, raised before any network call
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Non-success HTTP status from the geocoding or forecast endpoint
    #[error("Lookup failed with HTTP status {status}")]
    Lookup { status: reqwest::StatusCode },

    /// Transport-level failure (connect, timeout, body read)
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Success status but the expected payload was missing or unreadable
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SkycastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new lookup error from an HTTP status
    pub fn lookup(status: reqwest::StatusCode) -> Self {
        Self::Lookup { status }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// Every failure of the two network steps collapses to one generic
    /// message; the underlying status code or transport error is logged,
    /// never shown.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Validation { message } => message.clone(),
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SkycastError::Lookup { .. }
            | SkycastError::Network { .. }
            | SkycastError::MalformedResponse { .. } => {
                "Unable to fetch weather right now. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = SkycastError::validation("empty city name");
        assert!(matches!(validation_err, SkycastError::Validation { .. }));

        let lookup_err = SkycastError::lookup(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(lookup_err, SkycastError::Lookup { .. }));

        let malformed_err = SkycastError::malformed("current block missing");
        assert!(matches!(
            malformed_err,
            SkycastError::MalformedResponse { .. }
        ));
    }

    #[test]
    fn test_user_messages_collapse_to_generic_failure() {
        let generic = "Unable to fetch weather right now. Please try again later.";

        let lookup_err = SkycastError::lookup(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(lookup_err.user_message(), generic);

        let malformed_err = SkycastError::malformed("daily block missing");
        assert_eq!(malformed_err.user_message(), generic);
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = SkycastError::validation("Please enter a city name.");
        assert_eq!(err.user_message(), "Please enter a city name.");
    }

    #[test]
    fn test_lookup_error_carries_status() {
        let err = SkycastError::lookup(reqwest::StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("404"));
    }
}
