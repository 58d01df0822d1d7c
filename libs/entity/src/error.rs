use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Reason {
    #[error("field required")]
    Missing,
    #[error("expected {0}")]
    WrongType(&'static str),
    #[error("ensure this value is greater than or equal to {0}")]
    Minimum(i64),
    #[error("ensure this value is less than or equal to {0}")]
    Maximum(i64),
    #[error("expected a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: String,
    pub reason: Reason,
}

/// Every field of an input document that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub(crate) fn single(field: &str, reason: Reason) -> Self {
        Self::new(vec![FieldError {
            field: field.to_string(),
            reason,
        }])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> =
            self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}
