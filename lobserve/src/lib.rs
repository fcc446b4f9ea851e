//! Production-friendly observability hooks for agent run phases.
//!
//! ```rust
//! use lobserve::{MetricsRunHooks, SafeRunHooks, TracingRunHooks};
//!
//! let _tracing = SafeRunHooks::new(TracingRunHooks);
//! let _metrics = MetricsRunHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsRunHooks;
pub use safe_hooks::SafeRunHooks;
pub use tracing_hooks::TracingRunHooks;

pub mod prelude {
    pub use crate::{MetricsRunHooks, SafeRunHooks, TracingRunHooks};
}

#[cfg(test)]
mod tests;
