//! Model provider boundary: role-tagged messages in, raw reply text out.
//!
//! The agent layer treats the model client as opaque. A request carries an
//! ordered user/assistant turn history plus an optional system instruction
//! held separately; the reply is the raw text the model produced.
//!
//! ```rust
//! use lprovider::{Message, ModelRequest, Role};
//!
//! let request = ModelRequest::new(
//!     "gemini-1.5-flash",
//!     vec![Message::new(Role::User, "Fetch recipes for 'sugar-free biscuits'.")],
//! )
//! .with_system("You are a recipe agent.");
//!
//! assert!(request.validate().is_ok());
//! ```

mod error;
mod model;
mod provider;
mod registry;

pub mod credentials;

#[cfg(feature = "provider-gemini")]
pub mod gemini;

pub use credentials::SecretString;
pub use error::{ProviderError, ProviderErrorKind};
pub use model::{Message, ModelReply, ModelRequest, ProviderId, Role};
pub use provider::{ModelProvider, ProviderFuture, ScriptedProvider};
pub use registry::ProviderRegistry;
