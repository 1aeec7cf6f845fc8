//! Workflow Timings
//!
//! Delays and bounded waits used by the state machine.

use std::time::Duration;

use serde::Deserialize;

/// Timings for notices and requests, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowConfig {
    /// How long an error notice stays before the workflow resets
    pub error_display_ms: u64,
    /// How long a success notice stays before the workflow resets
    pub success_display_ms: u64,
    /// Upper bound on any single backend call
    pub request_timeout_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            error_display_ms: 3000,
            success_display_ms: 2500,
            request_timeout_ms: 10_000,
        }
    }
}

impl WorkflowConfig {
    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
