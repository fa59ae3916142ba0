//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_display() {
        let error = DomainError::UnknownProvider("bard".to_string());
        assert_eq!(error.to_string(), "Unknown provider: bard");
    }

    #[test]
    fn test_invalid_question_display() {
        let error = DomainError::InvalidQuestion("blank".to_string());
        assert_eq!(error.to_string(), "Invalid question: blank");
    }
}
