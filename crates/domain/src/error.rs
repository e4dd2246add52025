//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RehnumaError`]
//! via `From`, so callers only ever match on this enum.

/// Top-level error for every rehnuma use-case.
#[derive(Debug, thiserror::Error)]
pub enum RehnumaError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("seed error")]
    Seed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Both the English and the Urdu title are empty.
    #[error("title must not be empty in both languages")]
    EmptyTitle,

    /// Both the English and the Urdu description are empty.
    #[error("description must not be empty in both languages")]
    EmptyDescription,

    /// Step numbers are 1-based.
    #[error("step number must be at least 1, got {0}")]
    InvalidStepNumber(i64),

    /// Unknown service category.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    /// Chat input was blank.
    #[error("message must not be empty")]
    EmptyMessage,
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message_from_entity_name() {
        let err = NotFoundError {
            entity: "Service",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Service not found");
    }

    #[test]
    fn should_convert_validation_error_into_rehnuma_error() {
        let err: RehnumaError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            RehnumaError::Validation(ValidationError::EmptyTitle)
        ));
    }
}
