/// Creates a single [`Message`](crate::Message) from a role shorthand.
///
/// ```rust
/// use ladle::{Role, ldl_msg};
///
/// let message = ldl_msg!(assistant => "Done.");
/// assert_eq!(message.role, Role::Assistant);
/// assert_eq!(message.content, "Done.");
/// ```
#[macro_export]
macro_rules! ldl_msg {
    (user => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates an [`AgentSession`](crate::AgentSession) with provider
/// shorthand support.
///
/// ```rust
/// use ladle::{ProviderId, ldl_session};
///
/// let session = ldl_session!("session-1", gemini, "gemini-1.5-flash", "Be concise.");
/// assert_eq!(session.provider, ProviderId::Gemini);
/// assert_eq!(session.system_prompt.as_deref(), Some("Be concise."));
/// ```
#[macro_export]
macro_rules! ldl_session {
    ($session_id:expr, gemini, $model:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $crate::ProviderId::Gemini, $model)
    };
    ($session_id:expr, scripted, $model:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $crate::ProviderId::Scripted, $model)
    };
    ($session_id:expr, $provider:expr, $model:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $provider, $model)
    };
    ($session_id:expr, gemini, $model:expr, $system_prompt:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $crate::ProviderId::Gemini, $model)
            .with_system_prompt($system_prompt)
    };
    ($session_id:expr, scripted, $model:expr, $system_prompt:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $crate::ProviderId::Scripted, $model)
            .with_system_prompt($system_prompt)
    };
    ($session_id:expr, $provider:expr, $model:expr, $system_prompt:expr $(,)?) => {
        $crate::AgentSession::new($session_id, $provider, $model)
            .with_system_prompt($system_prompt)
    };
}
