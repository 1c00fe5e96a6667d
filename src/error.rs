use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when using a keyed store
///
/// A missing key is never an error: lookups return `None` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An erased store could not project the string key onto its own key type
    #[error("Key ({0}) cannot be represented by the underlying store")]
    InvalidKey(String),

    /// A value was read back with a type other than the one it was stored as
    #[error("Type mismatch for key ({key}): expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },

    /// A loaded entry cannot be stored in the target store
    #[error("Invalid value for key ({key}): {reason}")]
    InvalidValue { key: String, reason: String },

    /// The TOML source was malformed
    #[error("Parse error: {0}")]
    Parse(#[from] toml_edit::TomlError),

    /// Reading the source file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidKey("1:x".to_string());
        assert_eq!(
            err.to_string(),
            "Key (1:x) cannot be represented by the underlying store"
        );

        let err = StoreError::TypeMismatch {
            key: "volume".to_string(),
            expected: "bool",
        };
        assert_eq!(err.to_string(), "Type mismatch for key (volume): expected bool");

        let err = StoreError::InvalidValue {
            key: "port".to_string(),
            reason: "expected a string".to_string(),
        };
        assert!(err.to_string().contains("port"));
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
