//! Capability layer for registering and invoking agent tools.

mod error;
mod registry;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        ArgBinding, FunctionTool, Tool, ToolArgs, ToolDefinition, ToolError, ToolErrorKind,
        ToolRegistry,
    };
}

pub use error::{ToolError, ToolErrorKind};
pub use registry::ToolRegistry;
pub use tool::{FunctionTool, Tool};
pub use types::{ArgBinding, ToolArgs, ToolDefinition};
