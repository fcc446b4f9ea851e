//! Single-turn conversation controller over a model provider.
//!
//! One run is at most two provider exchanges: the first reply either
//! carries a `FINAL_ANSWER` directly or requests exactly one tool
//! invocation, whose serialized result is round-tripped back for the
//! final reply. The final payload is validated against the flow's
//! expected record shape before the caller sees it. Every failure is
//! terminal and typed; nothing is retried.

mod error;
mod hooks;
mod service;
mod types;

pub mod prelude {
    pub use crate::{
        AgentError, AgentErrorKind, AgentFlow, AgentOutcome, AgentPhase, AgentRunHooks,
        AgentRunRequest, AgentService, AgentServiceBuilder, AgentSession, FinalShape,
        NoopAgentRunHooks, ToolAdaptation,
    };
    pub use lcommon::{CancelToken, MetadataMap, RunId};
    pub use lschema::{Recipe, RecipeList, ValidatedRecord};
    pub use ltooling::{ArgBinding, Tool, ToolArgs, ToolDefinition, ToolError, ToolRegistry};
}

pub use error::{AgentError, AgentErrorKind};
pub use hooks::{AgentPhase, AgentRunHooks, NoopAgentRunHooks};
pub use service::{AgentService, AgentServiceBuilder, follow_up_instruction};
pub use types::{AgentFlow, AgentOutcome, AgentRunRequest, AgentSession, FinalShape, ToolAdaptation};
