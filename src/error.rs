//! Error types for Folio
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Dataset fetch failed (I/O, network or non-success HTTP status)
    #[snafu(display("Could not load data: {message}"))]
    Load { message: String },

    /// HTTP client error while fetching the dataset
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Dataset payload is not a well-formed array of company records
    #[snafu(display("Malformed dataset: {source}"))]
    Parse { source: serde_json::Error },

    /// Integer range with `min > max`
    #[snafu(display("Invalid range: min {min} is greater than max {max}"))]
    InvalidRange { min: i64, max: i64 },

    /// Selection from an empty sequence
    #[snafu(display("Cannot pick from an empty sequence"))]
    EmptyInput,

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config files, exports)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether this error means the dataset could not be made available.
    ///
    /// Hosts surface all of these as a single "failed to load" state.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Http { .. } | Self::Parse { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_grouping() {
        let load = Error::Load {
            message: "status 404".to_string(),
        };
        assert!(load.is_load_failure());

        let parse = serde_json::from_str::<Vec<u8>>("{").map_err(|source| Error::Parse { source });
        assert!(parse.is_err_and(|e| e.is_load_failure()));

        assert!(!Error::EmptyInput.is_load_failure());
        assert!(!Error::InvalidRange { min: 3, max: 1 }.is_load_failure());
    }

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidRange { min: 5, max: 2 };
        assert_eq!(err.to_string(), "Invalid range: min 5 is greater than max 2");
        assert_eq!(
            Error::EmptyInput.to_string(),
            "Cannot pick from an empty sequence"
        );
    }
}
