//! Fixed-count retry wrapper.

use crate::error::LlmError;

/// Run `operation` up to `retry_count` times with no delay between attempts.
///
/// `retry_count` is the total attempt budget: a budget of 1 means exactly one
/// attempt. When the final attempt fails the last error is wrapped in
/// [`LlmError::RetryExhausted`].
pub(crate) fn with_retry<T>(
    retry_count: u32,
    mut operation: impl FnMut() -> Result<T, LlmError>,
) -> Result<T, LlmError> {
    let mut attempts = 0;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(error) => {
                attempts += 1;
                if attempts < retry_count {
                    tracing::warn!(attempt = attempts, error = %error, "attempt failed, retrying");
                    continue;
                }
                return Err(LlmError::RetryExhausted {
                    retries: retry_count,
                    source: Box::new(error),
                });
            }
        }
    }
}
