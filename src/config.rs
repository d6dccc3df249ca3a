//! Process-wide defaults and per-client HTTP options.

use std::time::Duration;

use crate::error::LlmError;

/// Default connect/open timeout per HTTP attempt.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout per HTTP attempt.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(20);

/// Default total attempt budget. A value of 1 means a single attempt with
/// no retry.
pub const DEFAULT_RETRY_COUNT: u32 = 1;

/// HTTP options bound to one client instance.
///
/// Both timeouts apply per attempt, not cumulatively across retries.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connect/open timeout.
    pub open_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Total attempt budget (must be at least 1).
    pub retry_count: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            open_timeout: DEFAULT_OPEN_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

impl HttpConfig {
    pub(crate) fn validate(&self) -> Result<(), LlmError> {
        if self.retry_count == 0 {
            return Err(LlmError::ConfigurationError(
                "retry_count must be at least 1 (it is the total attempt budget)".to_string(),
            ));
        }
        Ok(())
    }
}
