use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Per-call deadline and cancellation signal
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tighter bound for this call. Never extends the client's default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Limit that applies given the client's configured default
    pub fn effective_timeout(&self, default: Duration) -> Duration {
        self.timeout.map_or(default, |t| t.min(default))
    }
}
