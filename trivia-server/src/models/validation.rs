//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent or null
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },

    /// Field doesn't have the expected shape
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Page number below 1
    InvalidPage { page: i64 },

    /// Page window holds no questions
    EmptyPage { page: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidPage { page } => {
                write!(f, "page must be a positive integer, got {}", page)
            }
            Self::EmptyPage { page } => write!(f, "no questions on page {}", page),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidPage { page: -1 };
        assert_eq!(err.to_string(), "page must be a positive integer, got -1");

        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");
    }
}
