//! Error types for the laundry_colors library

use thiserror::Error;

/// Result type alias for laundry_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color analysis operations
///
/// Degenerate image content (uniform color, fewer distinct colors than
/// requested clusters) is not an error; those cases produce a valid,
/// deterministic result. Errors here cover malformed input buffers and
/// malformed configuration only.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input buffer has the wrong shape for analysis
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Configuration value outside its accepted range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Internal invariant violation
    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl AnalysisError {
    /// Create an invalid-image error
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidImage { .. } => {
                "Could not analyze the image. Please provide an 8-bit color photo.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("Analysis setting '{}' is out of range.", parameter)
            }
            AnalysisError::ProcessingError { .. } => {
                "Color analysis failed. Please try with a different image.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = AnalysisError::invalid_parameter("k", 0);
        assert_eq!(err.to_string(), "Invalid parameter: k = 0");
    }

    #[test]
    fn test_user_messages_are_nonempty() {
        let errors = [
            AnalysisError::invalid_image("empty buffer"),
            AnalysisError::invalid_parameter("sample_fraction", 1.5),
            AnalysisError::ProcessingError {
                message: "internal".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
