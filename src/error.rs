//! Custom error types for release-summary.

use thiserror::Error;

/// Main error type for release-summary operations.
#[derive(Error, Debug)]
pub enum ReleaseSummaryError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("Invalid git remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    // Inference errors
    #[error("Inference service returned an empty result for {0}")]
    EmptyInference(String),

    #[error("Image generation failed: {0}")]
    MissingImage(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Parsing errors - automatic conversions via #[from]
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ReleaseSummaryError
pub type Result<T> = std::result::Result<T, ReleaseSummaryError>;

impl ReleaseSummaryError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an empty inference error naming the call site
    pub fn empty_inference(site: impl Into<String>) -> Self {
        Self::EmptyInference(site.into())
    }

    /// Create a missing image error
    pub fn missing_image(msg: impl Into<String>) -> Self {
        Self::MissingImage(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for ReleaseSummaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for ReleaseSummaryError {
    fn from(err: reqwest::Error) -> Self {
        match err.status().map(|s| s.as_u16()) {
            Some(401) | Some(403) => Self::AuthenticationError(err.to_string()),
            Some(429) => Self::RateLimitExceeded,
            _ => Self::NetworkError(err.to_string()),
        }
    }
}

// Implement From for reqwest header errors (needs custom message)
impl From<reqwest::header::InvalidHeaderValue> for ReleaseSummaryError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ReleaseSummaryError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ReleaseSummaryError::forge("API call failed");
        assert_eq!(err.to_string(), "Forge operation failed: API call failed");

        let err = ReleaseSummaryError::invalid_config("missing field");
        assert_eq!(err.to_string(), "Invalid configuration: missing field");

        let err = ReleaseSummaryError::empty_inference("release summary");
        assert_eq!(
            err.to_string(),
            "Inference service returned an empty result for release summary"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = ReleaseSummaryError::missing_image("no url");
        assert!(matches!(err, ReleaseSummaryError::MissingImage(_)));

        let err = ReleaseSummaryError::invalid_config("missing field");
        assert!(matches!(err, ReleaseSummaryError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_conversions() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid");
        assert!(toml_err.is_err());
        let err: ReleaseSummaryError = toml_err.unwrap_err().into();
        assert!(matches!(err, ReleaseSummaryError::TomlParseError(_)));

        let pattern_err = glob::Pattern::new("[");
        assert!(pattern_err.is_err());
        let err: ReleaseSummaryError = pattern_err.unwrap_err().into();
        assert!(matches!(err, ReleaseSummaryError::PatternError(_)));
    }
}
