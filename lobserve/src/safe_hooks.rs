use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use lagent::{AgentError, AgentPhase, AgentRunHooks};

/// Wraps another hook implementation and swallows any panic it raises,
/// so observability failures never abort a run.
pub struct SafeRunHooks<H> {
    inner: H,
}

impl<H> SafeRunHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> AgentRunHooks for SafeRunHooks<H>
where
    H: AgentRunHooks,
{
    fn on_phase_start(&self, phase: AgentPhase, session_id: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_phase_start(phase, session_id)
        }));
    }

    fn on_phase_success(&self, phase: AgentPhase, session_id: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_phase_success(phase, session_id, elapsed)
        }));
    }

    fn on_phase_failure(
        &self,
        phase: AgentPhase,
        session_id: &str,
        error: &AgentError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_phase_failure(phase, session_id, error, elapsed)
        }));
    }
}
