use std::fmt;

/// Result type for save-analyzer-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the segmentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No timestamps were supplied to segment
    EmptyInput,

    /// Segmentation settings out of range (non-positive gap, zero minimum size)
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "no save timestamps to segment"),
            Error::InvalidConfig(msg) => write!(f, "Invalid segment config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            Error::EmptyInput.to_string(),
            "no save timestamps to segment"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = Error::InvalidConfig("gap threshold must be positive".to_string());
        let msg = err.to_string();

        assert!(msg.starts_with("Invalid segment config:"));
        assert!(msg.contains("gap threshold"));
    }
}
