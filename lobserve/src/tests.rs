use std::sync::{Arc, Mutex};
use std::time::Duration;

use lagent::{AgentError, AgentPhase, AgentRunHooks};

use crate::{MetricsRunHooks, SafeRunHooks, TracingRunHooks};

fn sample_error() -> AgentError {
    AgentError::tool_not_found("get_recipes")
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    let hooks = TracingRunHooks;

    hooks.on_phase_start(AgentPhase::FirstReply, "session-1");
    hooks.on_phase_success(AgentPhase::FirstReply, "session-1", Duration::from_millis(10));
    hooks.on_phase_failure(
        AgentPhase::Validation,
        "session-1",
        &sample_error(),
        Duration::from_millis(10),
    );
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    let hooks = MetricsRunHooks;

    hooks.on_phase_start(AgentPhase::ToolDispatch, "session-1");
    hooks.on_phase_success(AgentPhase::ToolDispatch, "session-1", Duration::from_millis(20));
    hooks.on_phase_failure(
        AgentPhase::FinalReply,
        "session-1",
        &sample_error(),
        Duration::from_millis(20),
    );
}

#[derive(Default, Clone)]
struct RecordingRunHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl AgentRunHooks for RecordingRunHooks {
    fn on_phase_start(&self, _phase: AgentPhase, _session_id: &str) {
        self.events.lock().expect("events lock").push("start");
    }

    fn on_phase_success(&self, _phase: AgentPhase, _session_id: &str, _elapsed: Duration) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_phase_failure(
        &self,
        _phase: AgentPhase,
        _session_id: &str,
        _error: &AgentError,
        _elapsed: Duration,
    ) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicRunHooks;

impl AgentRunHooks for PanicRunHooks {
    fn on_phase_start(&self, _phase: AgentPhase, _session_id: &str) {
        panic!("start panic");
    }

    fn on_phase_success(&self, _phase: AgentPhase, _session_id: &str, _elapsed: Duration) {
        panic!("success panic");
    }

    fn on_phase_failure(
        &self,
        _phase: AgentPhase,
        _session_id: &str,
        _error: &AgentError,
        _elapsed: Duration,
    ) {
        panic!("failure panic");
    }
}

#[test]
fn safe_hooks_delegate_when_inner_succeeds() {
    let inner = RecordingRunHooks::default();
    let events = Arc::clone(&inner.events);
    let hooks = SafeRunHooks::new(inner);

    hooks.on_phase_start(AgentPhase::FirstReply, "session-1");
    hooks.on_phase_success(AgentPhase::FirstReply, "session-1", Duration::from_millis(5));
    hooks.on_phase_failure(
        AgentPhase::Validation,
        "session-1",
        &sample_error(),
        Duration::from_millis(5),
    );

    assert_eq!(
        *events.lock().expect("events lock"),
        vec!["start", "success", "failure"]
    );
}

#[test]
fn safe_hooks_swallow_panics() {
    let hooks = SafeRunHooks::new(PanicRunHooks);

    hooks.on_phase_start(AgentPhase::FirstReply, "session-1");
    hooks.on_phase_success(AgentPhase::FirstReply, "session-1", Duration::from_millis(5));
    hooks.on_phase_failure(
        AgentPhase::Validation,
        "session-1",
        &sample_error(),
        Duration::from_millis(5),
    );
}
