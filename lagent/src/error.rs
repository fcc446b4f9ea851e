//! Controller-level errors and conversion helpers.
//!
//! ```rust
//! use lagent::{AgentError, AgentErrorKind};
//!
//! let err = AgentError::tool_not_found("get_recipes");
//! assert_eq!(err.kind, AgentErrorKind::ToolNotFound);
//! assert!(err.to_string().contains("get_recipes"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use lprovider::ProviderError;
use lschema::SchemaError;
use ltooling::{ToolError, ToolErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentErrorKind {
    InvalidRequest,
    ToolNotFound,
    UnrecognizedResponse,
    Schema,
    ToolExecution,
    Provider,
    Cancelled,
}

/// `field` is populated for `Schema` failures only, naming the offending
/// field of the final payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentError {
    pub kind: AgentErrorKind,
    pub message: String,
    pub field: Option<String>,
}

impl AgentError {
    pub fn new(kind: AgentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::InvalidRequest, message)
    }

    pub fn tool_not_found(tool_name: impl Display) -> Self {
        Self::new(
            AgentErrorKind::ToolNotFound,
            format!("tool '{tool_name}' is not registered"),
        )
    }

    pub fn unrecognized_response(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::UnrecognizedResponse, message)
    }

    pub fn schema(error: SchemaError) -> Self {
        let mut mapped = Self::new(AgentErrorKind::Schema, error.reason.clone());
        mapped.field = Some(error.field);
        mapped
    }

    pub fn tool_execution(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::ToolExecution, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Provider, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(AgentErrorKind::Cancelled, message)
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            AgentErrorKind::InvalidRequest | AgentErrorKind::Schema
        )
    }
}

impl Display for AgentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{:?} [field={}]: {}", self.kind, field, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for AgentError {}

impl From<ProviderError> for AgentError {
    fn from(value: ProviderError) -> Self {
        AgentError::provider(value.to_string())
    }
}

impl From<ToolError> for AgentError {
    fn from(value: ToolError) -> Self {
        match value.kind {
            ToolErrorKind::NotFound => {
                AgentError::new(AgentErrorKind::ToolNotFound, value.to_string())
            }
            _ => AgentError::tool_execution(value.to_string()),
        }
    }
}

impl From<SchemaError> for AgentError {
    fn from(value: SchemaError) -> Self {
        AgentError::schema(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_conversion_carries_the_offending_field() {
        let err = AgentError::from(SchemaError::missing("glycemic_load"));
        assert_eq!(err.kind, AgentErrorKind::Schema);
        assert_eq!(err.field.as_deref(), Some("glycemic_load"));
        assert!(err.to_string().contains("glycemic_load"));
    }

    #[test]
    fn tool_not_found_maps_to_its_own_kind() {
        let err = AgentError::from(ToolError::not_found("no such tool"));
        assert_eq!(err.kind, AgentErrorKind::ToolNotFound);

        let err = AgentError::from(ToolError::execution("boom"));
        assert_eq!(err.kind, AgentErrorKind::ToolExecution);
    }

    #[test]
    fn provider_conversion_is_opaque() {
        let err = AgentError::from(ProviderError::timeout("deadline exceeded"));
        assert_eq!(err.kind, AgentErrorKind::Provider);
        assert!(err.message.contains("deadline exceeded"));
    }
}
