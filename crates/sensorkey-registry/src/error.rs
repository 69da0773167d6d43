//! Error types for the key registry.

/// Registry errors.
///
/// Only failures are errors here: "no match" and "empty registry" are regular
/// [`Verdict`](crate::types::Verdict) values, never error variants.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Candidate text does not parse as an RSA public key in PEM format.
    #[error("invalid public key format: {reason}")]
    InvalidKeyFormat { reason: String },

    /// Candidate is a well-formed public key of a non-RSA algorithm.
    #[error("unsupported public key algorithm {oid}: expected an RSA public key")]
    UnsupportedKeyAlgorithm { oid: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Unexpected internal failure. The message is deliberately short and
    /// carries no file-system paths.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RegistryError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Caller configuration issues
            Self::Config { .. } => 1,

            // Client-input (format) errors - the HTTP 400 analogue
            Self::InvalidKeyFormat { .. } | Self::UnsupportedKeyAlgorithm { .. } => 2,

            // Server faults - the HTTP 500 analogue
            Self::Internal { .. } => 3,
        }
    }

    /// Whether this is a client-input error (bad candidate key) rather than a
    /// fault in the registry itself.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyFormat { .. } | Self::UnsupportedKeyAlgorithm { .. }
        )
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_are_classified_as_client_input() {
        let err = RegistryError::InvalidKeyFormat {
            reason: "not PEM".to_string(),
        };
        assert!(err.is_format_error());
        assert_eq!(err.exit_code(), 2);

        let err = RegistryError::UnsupportedKeyAlgorithm {
            oid: "1.2.840.10045.2.1".to_string(),
        };
        assert!(err.is_format_error());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn internal_errors_are_not_format_errors() {
        let err = RegistryError::Internal {
            message: "corrupted entry".to_string(),
        };
        assert!(!err.is_format_error());
        assert_eq!(err.exit_code(), 3);
    }
}
