//! In-memory credential handling for provider adapters.
//!
//! ```rust
//! use lprovider::SecretString;
//!
//! let key = SecretString::new("abc123");
//! assert_eq!(key.expose(), "abc123");
//! assert_eq!(format!("{key:?}"), "[REDACTED]");
//! ```

use std::env;

use crate::ProviderError;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Reads an API key from the process environment. A missing or blank
/// variable is an authentication failure, not a panic.
pub fn env_api_key(variable: &str) -> Result<SecretString, ProviderError> {
    match env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::new(value)),
        _ => Err(ProviderError::authentication(format!(
            "environment variable '{variable}' is not set"
        ))),
    }
}
