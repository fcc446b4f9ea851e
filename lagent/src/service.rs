//! Controller state machine for the single-turn-or-two-turn exchange.

use std::sync::Arc;
use std::time::Instant;

use lcommon::CancelToken;
use lprotocol::ParsedResponse;
use lprovider::{Message, ModelProvider, ModelReply, ModelRequest, Role};
use lschema::{SchemaError, validate};
use ltooling::{ArgBinding, ToolArgs, ToolRegistry};
use serde_json::Value;

use crate::{
    AgentError, AgentFlow, AgentOutcome, AgentPhase, AgentRunHooks, AgentRunRequest, AgentSession,
    NoopAgentRunHooks, ToolAdaptation,
};

/// Round-trip instruction carrying a serialized tool result back to the
/// model. The wording is part of the de facto prompt contract.
pub fn follow_up_instruction(tool_name: &str, result: &Value) -> String {
    format!("The result for {tool_name} is {result}. Provide the FINAL_ANSWER in JSON format.")
}

#[derive(Clone)]
pub struct AgentService {
    provider: Arc<dyn ModelProvider>,
    registry: Arc<ToolRegistry>,
    flow: AgentFlow,
    hooks: Arc<dyn AgentRunHooks>,
    cancel: CancelToken,
}

impl AgentService {
    pub fn builder(provider: Arc<dyn ModelProvider>) -> AgentServiceBuilder {
        AgentServiceBuilder::new(provider)
    }

    /// Drives one run to a terminal state: a validated record or a
    /// single typed failure. At most two provider calls are issued, and
    /// the cancellation token is honored immediately before each one.
    pub async fn run(&self, request: AgentRunRequest) -> Result<AgentOutcome, AgentError> {
        if request.user_input.trim().is_empty() {
            return Err(AgentError::invalid_request("user_input must not be empty"));
        }

        let AgentRunRequest {
            session,
            user_input,
            temperature,
            max_tokens,
        } = request;

        let mut turns = vec![Message::new(Role::User, user_input)];

        let first = self
            .call_model(&session, &turns, temperature, max_tokens, AgentPhase::FirstReply)
            .await?;

        match lprotocol::parse(&first.text) {
            ParsedResponse::FinalAnswer { payload } => {
                self.validate_final(&session, &payload, None)
            }
            ParsedResponse::FunctionCall { name, args } => {
                let result = self.dispatch_tool(&session, &name, args)?;

                turns.push(Message::new(Role::Assistant, first.text.trim()));
                turns.push(Message::new(
                    Role::User,
                    follow_up_instruction(&name, &result),
                ));

                let second = self
                    .call_model(&session, &turns, temperature, max_tokens, AgentPhase::FinalReply)
                    .await?;

                // Exactly one tool call per run: the reply after the
                // round trip must be a final answer.
                match lprotocol::parse(&second.text) {
                    ParsedResponse::FinalAnswer { payload } => {
                        self.validate_final(&session, &payload, Some(name))
                    }
                    ParsedResponse::FunctionCall {
                        name: chained_name, ..
                    } => Err(AgentError::unrecognized_response(format!(
                        "expected FINAL_ANSWER after the tool round trip, got a chained \
                         FUNCTION_CALL to '{chained_name}'"
                    ))),
                    ParsedResponse::Unrecognized { .. } => Err(AgentError::unrecognized_response(
                        "reply after the tool round trip matches neither protocol form",
                    )),
                }
            }
            ParsedResponse::Unrecognized { .. } => Err(AgentError::unrecognized_response(
                "reply matches neither FUNCTION_CALL nor FINAL_ANSWER",
            )),
        }
    }

    async fn call_model(
        &self,
        session: &AgentSession,
        turns: &[Message],
        temperature: Option<f32>,
        max_tokens: Option<u32>,
        phase: AgentPhase,
    ) -> Result<ModelReply, AgentError> {
        self.hooks.on_phase_start(phase, &session.id);
        let started = Instant::now();

        let result = self
            .call_model_inner(session, turns, temperature, max_tokens)
            .await;

        self.report(phase, session, &result.as_ref().err(), started);
        result
    }

    async fn call_model_inner(
        &self,
        session: &AgentSession,
        turns: &[Message],
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<ModelReply, AgentError> {
        if self.cancel.is_cancelled() {
            return Err(AgentError::cancelled("run cancelled before the model call"));
        }

        let mut model_request = ModelRequest::new(session.model.clone(), turns.to_vec());
        if let Some(system_prompt) = &session.system_prompt {
            model_request = model_request.with_system(system_prompt.clone());
        }

        if let Some(value) = temperature {
            model_request = model_request.with_temperature(value);
        }

        if let Some(value) = max_tokens {
            model_request = model_request.with_max_tokens(value);
        }

        Ok(self.provider.generate(model_request).await?)
    }

    fn dispatch_tool(
        &self,
        session: &AgentSession,
        name: &str,
        args: Vec<String>,
    ) -> Result<Value, AgentError> {
        self.hooks.on_phase_start(AgentPhase::ToolDispatch, &session.id);
        let started = Instant::now();

        let result = self.dispatch_tool_inner(name, args);
        self.report(AgentPhase::ToolDispatch, session, &result.as_ref().err(), started);
        result
    }

    fn dispatch_tool_inner(&self, name: &str, args: Vec<String>) -> Result<Value, AgentError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| AgentError::tool_not_found(name))?;

        let tool_args = match tool.definition().binding {
            ArgBinding::Positional => ToolArgs::Positional(args),
            ArgBinding::Recipe => match &self.flow.adaptation {
                ToolAdaptation::RecipeStub { template } => ToolArgs::Recipe(template.clone()),
                ToolAdaptation::Positional => {
                    return Err(AgentError::tool_execution(format!(
                        "tool '{name}' expects a recipe record but the flow declares no stub"
                    )));
                }
            },
        };

        tool.invoke(&tool_args)
            .map_err(|error| AgentError::from(error.with_tool_name(name)))
    }

    fn validate_final(
        &self,
        session: &AgentSession,
        payload: &str,
        invoked_tool: Option<String>,
    ) -> Result<AgentOutcome, AgentError> {
        self.hooks.on_phase_start(AgentPhase::Validation, &session.id);
        let started = Instant::now();

        let result = self.validate_final_inner(session, payload, invoked_tool);
        self.report(AgentPhase::Validation, session, &result.as_ref().err(), started);
        result
    }

    fn validate_final_inner(
        &self,
        session: &AgentSession,
        payload: &str,
        invoked_tool: Option<String>,
    ) -> Result<AgentOutcome, AgentError> {
        let decoded: Value = serde_json::from_str(payload).map_err(|err| {
            AgentError::schema(SchemaError::invalid(
                "$",
                format!("final payload is not valid JSON: {err}"),
            ))
        })?;

        let record = validate(&decoded, self.flow.final_shape.record_shape())?;

        Ok(AgentOutcome {
            session_id: session.id.clone(),
            record,
            final_payload: payload.to_string(),
            invoked_tool,
        })
    }

    fn report(
        &self,
        phase: AgentPhase,
        session: &AgentSession,
        error: &Option<&AgentError>,
        started: Instant,
    ) {
        match error {
            Some(error) => {
                self.hooks
                    .on_phase_failure(phase, &session.id, error, started.elapsed())
            }
            None => self
                .hooks
                .on_phase_success(phase, &session.id, started.elapsed()),
        }
    }
}

pub struct AgentServiceBuilder {
    provider: Arc<dyn ModelProvider>,
    registry: Arc<ToolRegistry>,
    flow: AgentFlow,
    hooks: Arc<dyn AgentRunHooks>,
    cancel: CancelToken,
}

impl AgentServiceBuilder {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            registry: Arc::new(ToolRegistry::new()),
            flow: AgentFlow::recipe_list(),
            hooks: Arc::new(NoopAgentRunHooks),
            cancel: CancelToken::new(),
        }
    }

    pub fn registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn flow(mut self, flow: AgentFlow) -> Self {
        self.flow = flow;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn AgentRunHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn build(self) -> AgentService {
        AgentService {
            provider: self.provider,
            registry: self.registry,
            flow: self.flow,
            hooks: self.hooks,
            cancel: self.cancel,
        }
    }
}
