//! Session, run request, flow configuration, and outcome types.
//!
//! ```rust
//! use lagent::{AgentFlow, AgentRunRequest, AgentSession, FinalShape};
//! use lprovider::ProviderId;
//!
//! let session = AgentSession::new("s1", ProviderId::Scripted, "gemini-1.5-flash")
//!     .with_system_prompt("You are a recipe agent.");
//! let request = AgentRunRequest::new(session, "Fetch recipes for 'sugar-free biscuits'.");
//! let flow = AgentFlow::recipe_list();
//!
//! assert_eq!(flow.final_shape, FinalShape::RecipeList);
//! assert!(!request.user_input.is_empty());
//! ```

use lprovider::ProviderId;
use lschema::{Recipe, RecordShape, ValidatedRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSession {
    pub id: String,
    pub provider: ProviderId,
    pub model: String,
    pub system_prompt: Option<String>,
}

impl AgentSession {
    pub fn new(id: impl Into<String>, provider: ProviderId, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider,
            model: model.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentRunRequest {
    pub session: AgentSession,
    pub user_input: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl AgentRunRequest {
    pub fn new(session: AgentSession, user_input: impl Into<String>) -> Self {
        Self {
            session,
            user_input: user_input.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Record shape the final payload must validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalShape {
    Recipe,
    RecipeList,
}

impl FinalShape {
    pub fn record_shape(self) -> RecordShape {
        match self {
            Self::Recipe => RecordShape::Recipe,
            Self::RecipeList => RecordShape::RecipeList,
        }
    }
}

/// How parsed positional strings reach a tool whose handler wants a
/// decoded record. Declared on the flow, applied against each tool's
/// own argument binding; never inferred from the arguments themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAdaptation {
    /// Pass the parsed strings through untouched.
    Positional,
    /// Recipe-bound tools receive this template record.
    RecipeStub { template: Recipe },
}

/// The two historical flows are one controller parameterized by the
/// expected final shape and the tool argument adaptation.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFlow {
    pub final_shape: FinalShape,
    pub adaptation: ToolAdaptation,
}

impl AgentFlow {
    /// List flow: tools take positional strings, the final payload is a
    /// `RecipeList`.
    pub fn recipe_list() -> Self {
        Self {
            final_shape: FinalShape::RecipeList,
            adaptation: ToolAdaptation::Positional,
        }
    }

    /// Detail flow: recipe-bound tools are fed a stub record, the final
    /// payload is a single `Recipe`.
    pub fn recipe_detail(template: Recipe) -> Self {
        Self {
            final_shape: FinalShape::Recipe,
            adaptation: ToolAdaptation::RecipeStub { template },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentOutcome {
    pub session_id: String,
    pub record: ValidatedRecord,
    pub final_payload: String,
    pub invoked_tool: Option<String>,
}
