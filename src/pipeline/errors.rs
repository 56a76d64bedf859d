//! Error types for job conversion

use thiserror::Error;

/// The job configuration document is not well-formed XML
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed XML: {message}")]
pub struct ParseError {
    /// Description of the well-formedness violation.
    pub message: String,
}

impl ParseError {
    /// Creates a parse error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while converting a job into a Jenkinsfile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input document given as text was not well-formed
    #[error(transparent)]
    Xml(#[from] ParseError),

    /// Input file is absent, unreadable or malformed
    #[error("Failed to parse job configuration '{path}': {reason}")]
    Parse {
        /// Path of the input document.
        path: String,
        /// Why the document could not be parsed.
        reason: String,
    },

    /// Output file could not be written
    #[error("Failed to write Jenkinsfile '{path}': {reason}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

impl ConvertError {
    /// Returns true if the error came from reading or parsing the input
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Xml(_) | Self::Parse { .. })
    }

    /// Returns true if the error came from writing the output
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("unclosed element <scm>");
        assert_eq!(err.to_string(), "Malformed XML: unclosed element <scm>");
    }

    #[test]
    fn test_convert_error_from_parse_error() {
        let err: ConvertError = ParseError::new("empty document").into();
        assert!(err.is_parse());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Malformed XML: empty document");
    }

    #[test]
    fn test_convert_error_io() {
        let err = ConvertError::Io {
            path: "/readonly/Jenkinsfile".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.is_io());
        assert!(err.to_string().contains("/readonly/Jenkinsfile"));
    }
}
