//! Tool trait contract for registry-managed capabilities.
//!
//! Handlers are pure, synchronous functions over their declared argument
//! shape; results are JSON values so the controller can serialize them
//! back into the conversation.
//!
//! ```rust
//! use ltooling::{ArgBinding, FunctionTool, Tool, ToolArgs, ToolDefinition};
//!
//! let tool = FunctionTool::new(
//!     ToolDefinition::new("echo", "Echoes its arguments", ArgBinding::Positional),
//!     |args| {
//!         let args = args.as_positional()?;
//!         Ok(serde_json::json!(args))
//!     },
//! );
//!
//! assert_eq!(tool.definition().name, "echo");
//! let output = tool.invoke(&ToolArgs::positional(["hi"])).unwrap();
//! assert_eq!(output, serde_json::json!(["hi"]));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::{ToolArgs, ToolDefinition, ToolError};

pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    fn invoke(&self, args: &ToolArgs) -> Result<Value, ToolError>;
}

type ToolHandler = dyn Fn(&ToolArgs) -> Result<Value, ToolError> + Send + Sync;

pub struct FunctionTool {
    definition: ToolDefinition,
    handler: Arc<ToolHandler>,
}

impl FunctionTool {
    pub fn new<F>(definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(&ToolArgs) -> Result<Value, ToolError> + Send + Sync + 'static,
    {
        Self {
            definition,
            handler: Arc::new(handler),
        }
    }
}

impl Tool for FunctionTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    fn invoke(&self, args: &ToolArgs) -> Result<Value, ToolError> {
        (self.handler)(args)
    }
}
