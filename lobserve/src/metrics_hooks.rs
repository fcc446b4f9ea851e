//! Metrics-based hooks for agent run phases.
//!
//! ```rust
//! use lagent::AgentRunHooks;
//! use lobserve::MetricsRunHooks;
//!
//! fn accepts_run_hooks(_hooks: &dyn AgentRunHooks) {}
//!
//! let hooks = MetricsRunHooks;
//! accepts_run_hooks(&hooks);
//! ```

use std::time::Duration;

use lagent::{AgentError, AgentPhase, AgentRunHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsRunHooks;

impl AgentRunHooks for MetricsRunHooks {
    fn on_phase_start(&self, phase: AgentPhase, _session_id: &str) {
        metrics::counter!("ladle_phase_start_total", "phase" => phase.to_string()).increment(1);
    }

    fn on_phase_success(&self, phase: AgentPhase, _session_id: &str, elapsed: Duration) {
        metrics::counter!("ladle_phase_success_total", "phase" => phase.to_string()).increment(1);
        metrics::histogram!(
            "ladle_phase_duration_seconds",
            "phase" => phase.to_string(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_phase_failure(
        &self,
        phase: AgentPhase,
        _session_id: &str,
        error: &AgentError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "ladle_phase_failure_total",
            "phase" => phase.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "ladle_phase_duration_seconds",
            "phase" => phase.to_string(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
