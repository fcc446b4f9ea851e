//! Common imports for most ladle applications.

pub use crate::prompts::{
    RECIPE_DETAIL_SYSTEM_PROMPT, RECIPE_LIST_SYSTEM_PROMPT, recipe_detail_query, recipe_list_query,
};
pub use crate::runtime::{
    agent_with, default_hooks, detail_stub, recipe_detail_agent, recipe_list_agent,
};
pub use crate::tools::{recipe_catalog, recipe_detail_tools, recipe_list_tools};
pub use crate::util::{
    assistant_message, detail_turn, list_turn, parse_provider_id, recipe_detail_session,
    recipe_list_session, session, user_message,
};
pub use crate::{ldl_msg, ldl_session};
pub use crate::{
    AgentError, AgentErrorKind, AgentFlow, AgentOutcome, AgentPhase, AgentRunHooks,
    AgentRunRequest, AgentService, AgentServiceBuilder, AgentSession, ArgBinding, BoxFuture,
    CancelToken, FinalShape, Message, MetricsRunHooks, ModelProvider, ModelReply, ModelRequest,
    NoopAgentRunHooks, ParsedResponse, ProviderError, ProviderErrorKind, ProviderId,
    ProviderRegistry, Recipe, RecipeList, RecordShape, Role, SafeRunHooks, SchemaError,
    ScriptedProvider, Tool, ToolAdaptation, ToolArgs, ToolDefinition, ToolError, ToolErrorKind,
    ToolRegistry, TracingRunHooks, ValidatedRecord, validate,
};
