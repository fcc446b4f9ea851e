//! Tracing-based hooks for agent run phases.
//!
//! ```rust
//! use lagent::AgentRunHooks;
//! use lobserve::TracingRunHooks;
//!
//! fn accepts_run_hooks(_hooks: &dyn AgentRunHooks) {}
//!
//! let hooks = TracingRunHooks;
//! accepts_run_hooks(&hooks);
//! ```

use std::time::Duration;

use lagent::{AgentError, AgentPhase, AgentRunHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRunHooks;

impl AgentRunHooks for TracingRunHooks {
    fn on_phase_start(&self, phase: AgentPhase, session_id: &str) {
        tracing::info!(
            event = "phase_start",
            agent_phase = %phase,
            session_id
        );
    }

    fn on_phase_success(&self, phase: AgentPhase, session_id: &str, elapsed: Duration) {
        tracing::info!(
            event = "phase_success",
            agent_phase = %phase,
            session_id,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_phase_failure(
        &self,
        phase: AgentPhase,
        session_id: &str,
        error: &AgentError,
        elapsed: Duration,
    ) {
        tracing::error!(
            event = "phase_failure",
            agent_phase = %phase,
            session_id,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
