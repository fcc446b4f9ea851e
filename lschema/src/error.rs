//! Validation errors naming the offending field.
//!
//! ```rust
//! use lschema::SchemaError;
//!
//! let err = SchemaError::missing("glycemic_load");
//! assert_eq!(err.field, "glycemic_load");
//! assert!(err.to_string().contains("glycemic_load"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub field: String,
    pub reason: String,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }

    pub fn wrong_type(field: impl Into<String>, expected: &str) -> Self {
        Self::new(field, format!("expected {expected}"))
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(field, reason)
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.reason)
    }
}

impl Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field_and_reason() {
        let err = SchemaError::wrong_type("ingredients", "a sequence of strings");
        assert_eq!(
            err.to_string(),
            "field 'ingredients': expected a sequence of strings"
        );
    }
}
