//! Unified facade over the ladle workspace crates.
//!
//! This crate is designed to be the single dependency for most
//! applications. It re-exports the core ladle crates and provides the
//! built-in recipe tools, the stock prompts, and wiring helpers for
//! the two recipe flows.

mod macros;

pub mod prelude;
pub mod prompts;
pub mod runtime;
pub mod tools;
pub mod util;

pub use lagent;
pub use lcommon;
pub use lobserve;
pub use lprotocol;
pub use lprovider;
pub use lschema;
pub use ltooling;

pub use lagent::{
    AgentError, AgentErrorKind, AgentFlow, AgentOutcome, AgentPhase, AgentRunHooks,
    AgentRunRequest, AgentService, AgentServiceBuilder, AgentSession, FinalShape,
    NoopAgentRunHooks, ToolAdaptation, follow_up_instruction,
};
pub use lcommon::{BoxFuture, CancelToken, MetadataMap, RunId};
pub use lobserve::{MetricsRunHooks, SafeRunHooks, TracingRunHooks};
pub use lprotocol::{
    FINAL_ANSWER_PREFIX, FUNCTION_CALL_PREFIX, ParsedResponse, parse, render_final_answer,
    render_function_call,
};
pub use lprovider::{
    Message, ModelProvider, ModelReply, ModelRequest, ProviderError, ProviderErrorKind,
    ProviderFuture, ProviderId, ProviderRegistry, Role, ScriptedProvider, SecretString,
};
pub use lschema::{
    AgentAction, Recipe, RecipeList, RecordShape, SchemaError, ValidatedRecord, validate,
    validate_agent_action, validate_recipe, validate_recipe_list,
};
pub use ltooling::{
    ArgBinding, FunctionTool, Tool, ToolArgs, ToolDefinition, ToolError, ToolErrorKind,
    ToolRegistry,
};

pub use runtime::{
    agent_with, default_hooks, detail_stub, recipe_detail_agent, recipe_list_agent,
};
pub use util::{
    assistant_message, detail_turn, list_turn, parse_provider_id, recipe_detail_session,
    recipe_list_session, session, user_message,
};

#[cfg(test)]
mod tests {
    use crate::{ProviderId, Role};

    #[test]
    fn ldl_msg_macro_creates_expected_message() {
        let message = crate::ldl_msg!(user => "hello");
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hello");
    }

    #[test]
    fn ldl_session_macro_supports_provider_shorthand_and_prompt() {
        let session = crate::ldl_session!(
            "session-1",
            gemini,
            "gemini-1.5-flash",
            "You are a recipe agent."
        );

        assert_eq!(session.provider, ProviderId::Gemini);
        assert_eq!(
            session.system_prompt.as_deref(),
            Some("You are a recipe agent.")
        );
    }
}
