//! Tool registry for lookup and invocation by tool definition name.

use std::sync::Arc;

use lcommon::Registry;
use serde_json::Value;

use crate::{FunctionTool, Tool, ToolArgs, ToolDefinition, ToolError};

#[derive(Default)]
pub struct ToolRegistry {
    tools: Registry<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a duplicate name silently replaces the earlier tool.
    /// This is the contract, not an accident; callers wanting collision
    /// detection can check [`contains`](Self::contains) first.
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        let name = tool.definition().name;
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn register_fn<F>(&mut self, definition: ToolDefinition, handler: F)
    where
        F: Fn(&ToolArgs) -> Result<Value, ToolError> + Send + Sync + 'static,
    {
        self.register(FunctionTool::new(definition, handler));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    pub fn invoke(&self, name: &str, args: &ToolArgs) -> Result<Value, ToolError> {
        let tool = self.get(name).ok_or_else(|| {
            ToolError::not_found(format!("tool '{name}' is not registered"))
                .with_tool_name(name)
        })?;

        tool.invoke(args)
            .map_err(|error| error.with_tool_name(name))
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
