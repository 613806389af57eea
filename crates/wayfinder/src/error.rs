//! Error types for pattern compilation.

use thiserror::Error;

/// Reasons a route pattern cannot be compiled.
///
/// Patterns are written by application authors, not taken from user input,
/// so these surface as programming errors. Component constructors such as
/// [`Route::new`](crate::Route::new) panic on them; use the `try_` variants
/// to handle them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The same `:name` appears more than once in a pattern.
    #[error("pattern '{pattern}' declares parameter ':{name}' more than once")]
    DuplicateParam {
        /// The offending pattern text.
        pattern: String,
        /// The repeated parameter name.
        name: String,
    },

    /// The pattern exceeds the maximum accepted length.
    #[error("pattern length {len} exceeds maximum allowed length of {max} bytes")]
    TooLong {
        /// Length of the rejected pattern in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_param_display() {
        let err = PatternError::DuplicateParam {
            pattern: "/:id/:id".to_string(),
            name: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pattern '/:id/:id' declares parameter ':id' more than once"
        );
    }

    #[test]
    fn test_too_long_display() {
        let err = PatternError::TooLong { len: 2000, max: 1024 };
        assert!(err.to_string().contains("2000"));
        assert!(err.to_string().contains("1024"));
    }
}
