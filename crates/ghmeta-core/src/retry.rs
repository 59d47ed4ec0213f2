// SPDX-License-Identifier: Apache-2.0

//! Retry logic with exponential backoff for transient failures.
//!
//! Only errors for which [`GhMetaError::is_retryable`] holds are retried;
//! authentication and not-found failures surface immediately.

use std::future::Future;
use std::time::Duration;

use backon::{BackoffBuilder, ExponentialBuilder, Retryable};
use tracing::warn;

use crate::error::GhMetaError;

/// Creates a configured exponential backoff builder for retries.
///
/// - Factor: 2 (exponential growth)
/// - Min delay: 1 second
/// - Max times: `max_retries` (0 disables retrying)
/// - Jitter: enabled
#[must_use]
pub fn retry_backoff(max_retries: usize) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_factor(2.0)
        .with_min_delay(Duration::from_secs(1))
        .with_max_times(max_retries)
        .with_jitter()
}

/// Runs `op`, retrying transient failures up to `max_retries` times.
pub async fn with_retry<T, F, Fut>(max_retries: usize, op: F) -> Result<T, GhMetaError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GhMetaError>>,
{
    retry_with(retry_backoff(max_retries), op).await
}

/// Runs `op` with an explicit backoff policy.
pub(crate) async fn retry_with<T, B, F, Fut>(backoff: B, op: F) -> Result<T, GhMetaError>
where
    B: BackoffBuilder,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GhMetaError>>,
{
    op.retry(backoff)
        .when(GhMetaError::is_retryable)
        .notify(|err: &GhMetaError, delay: Duration| {
            warn!(error = %err, delay_ms = delay.as_millis(), "Retrying GitHub request");
        })
        .await
}
