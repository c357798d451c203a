use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Calendar lookup failed: {0}")]
    #[diagnostic(code(yomi_digest::calendar_lookup))]
    CalendarLookup(String),

    #[error("{0} not found")]
    #[diagnostic(code(yomi_digest::not_found))]
    NotFound(String),

    #[error("Text fetch failed: {0}")]
    #[diagnostic(code(yomi_digest::text_fetch))]
    TextFetch(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(yomi_digest::config))]
    Config(String),

    #[error("{0} input is empty")]
    #[diagnostic(code(yomi_digest::empty_input))]
    EmptyInput(String),

    #[error("Summarization failed: {0}")]
    #[diagnostic(code(yomi_digest::summarization))]
    Summarization(String),

    #[error("Request timed out: {0}")]
    #[diagnostic(code(yomi_digest::timeout))]
    Timeout(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(yomi_digest::environment))]
    Environment(String),

    #[error(transparent)]
    #[diagnostic(code(yomi_digest::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(yomi_digest::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(yomi_digest::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DigestResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid value for environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create calendar lookup errors
pub fn calendar_error(message: &str) -> Error {
    Error::CalendarLookup(message.to_string())
}

/// Helper to create text fetch errors
pub fn text_fetch_error(message: &str) -> Error {
    Error::TextFetch(message.to_string())
}

/// Helper to create summarization errors
pub fn summarization_error(message: &str) -> Error {
    Error::Summarization(message.to_string())
}

/// Map a transport-level reqwest failure, keeping timeouts distinct.
///
/// `wrap` decides which stage-specific variant everything else becomes.
pub fn from_reqwest(context: &str, err: reqwest::Error, wrap: fn(&str) -> Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(format!("{}: {}", context, err))
    } else {
        wrap(&format!("{}: {}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_subject() {
        assert_eq!(
            Error::NotFound("Tanya Yomi".to_string()).to_string(),
            "Tanya Yomi not found"
        );
        assert_eq!(
            Error::EmptyInput("Rambam".to_string()).to_string(),
            "Rambam input is empty"
        );
    }

    #[test]
    fn config_and_empty_input_are_distinct() {
        assert!(matches!(config_error("missing key"), Error::Config(_)));
        assert!(!matches!(
            Error::EmptyInput("Tanya".to_string()),
            Error::Config(_)
        ));
    }
}
