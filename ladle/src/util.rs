//! Small convenience constructors for common types.

use crate::prompts::{
    RECIPE_DETAIL_SYSTEM_PROMPT, RECIPE_LIST_SYSTEM_PROMPT, recipe_detail_query, recipe_list_query,
};
use crate::{AgentRunRequest, AgentSession, Message, ProviderId, Role};

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

pub fn session(
    id: impl Into<String>,
    provider: ProviderId,
    model: impl Into<String>,
) -> AgentSession {
    AgentSession::new(id, provider, model)
}

/// Session preconfigured with the list flow system prompt.
pub fn recipe_list_session(
    id: impl Into<String>,
    provider: ProviderId,
    model: impl Into<String>,
) -> AgentSession {
    session(id, provider, model).with_system_prompt(RECIPE_LIST_SYSTEM_PROMPT)
}

/// Session preconfigured with the detail flow system prompt.
pub fn recipe_detail_session(
    id: impl Into<String>,
    provider: ProviderId,
    model: impl Into<String>,
) -> AgentSession {
    session(id, provider, model).with_system_prompt(RECIPE_DETAIL_SYSTEM_PROMPT)
}

pub fn list_turn(session: AgentSession, dish: &str) -> AgentRunRequest {
    AgentRunRequest::new(session, recipe_list_query(dish))
}

pub fn detail_turn(session: AgentSession, dish: &str) -> AgentRunRequest {
    AgentRunRequest::new(session, recipe_detail_query(dish))
}

pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    match value.trim().to_ascii_lowercase().as_str() {
        "gemini" | "google" => Some(ProviderId::Gemini),
        "scripted" | "fake" => Some(ProviderId::Scripted),
        _ => None,
    }
}
