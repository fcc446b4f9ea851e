//! Run hook contracts for observing controller phase execution.
//!
//! ```rust
//! use lagent::{AgentRunHooks, NoopAgentRunHooks};
//!
//! fn accepts_hooks(_hooks: &dyn AgentRunHooks) {}
//!
//! let hooks = NoopAgentRunHooks;
//! accepts_hooks(&hooks);
//! ```

use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::AgentError;

/// Controller phases in execution order. A run visits `FirstReply`, then
/// either finishes at `Validation` or passes through `ToolDispatch` and
/// `FinalReply` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    FirstReply,
    ToolDispatch,
    FinalReply,
    Validation,
}

impl Display for AgentPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let phase = match self {
            Self::FirstReply => "first_reply",
            Self::ToolDispatch => "tool_dispatch",
            Self::FinalReply => "final_reply",
            Self::Validation => "validation",
        };

        f.write_str(phase)
    }
}

pub trait AgentRunHooks: Send + Sync {
    fn on_phase_start(&self, _phase: AgentPhase, _session_id: &str) {}

    fn on_phase_success(&self, _phase: AgentPhase, _session_id: &str, _elapsed: Duration) {}

    fn on_phase_failure(
        &self,
        _phase: AgentPhase,
        _session_id: &str,
        _error: &AgentError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAgentRunHooks;

impl AgentRunHooks for NoopAgentRunHooks {}
