//! Error types for ratekit

use thiserror::Error;

/// Result type alias for ratekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ratekit operations
#[derive(Error, Debug)]
pub enum Error {
    /// No host application context is attached
    #[error("Host application context not available.")]
    ContextUnavailable,

    /// No interactive foreground surface is attached
    #[error("Foreground activity not available.")]
    ActivityUnavailable,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Stable identity string for the command-surface boundary.
    ///
    /// The precondition errors keep the identifiers the application
    /// layer already matches on; everything else is internal.
    pub fn identity(&self) -> &'static str {
        match self {
            Error::ContextUnavailable => "context_is_null",
            Error::ActivityUnavailable => "activity_is_null",
            Error::Io(_) => "io_error",
            Error::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_identities() {
        assert_eq!(Error::ContextUnavailable.identity(), "context_is_null");
        assert_eq!(Error::ActivityUnavailable.identity(), "activity_is_null");
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            Error::ContextUnavailable.to_string(),
            "Host application context not available."
        );
        assert_eq!(
            Error::ActivityUnavailable.to_string(),
            "Foreground activity not available."
        );
    }
}
