//! Startup readiness gating
//!
//! The service must not accept traffic until the store answers. The wait is
//! bounded: a fixed number of checks with a fixed pause in between.

use std::time::Duration;

use async_trait::async_trait;

use crate::{Error, Result};

/// A single connectivity check against some backend.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Run one check. `Ok` means the backend is usable right now.
    async fn probe(&self) -> Result<()>;
}

/// Retry budget for [`wait_until_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            backoff: Duration::from_secs(3),
        }
    }
}

/// Probe until the first success, sleeping `policy.backoff` after each failure.
///
/// Returns [`Error::StoreUnavailable`] once `policy.max_attempts` checks have
/// failed. A non-transient failure (see [`Error::is_transient`]) is returned
/// as-is without further attempts.
pub async fn wait_until_ready<P>(probe: &P, policy: &RetryPolicy) -> Result<()>
where
    P: ReadinessProbe + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match probe.probe().await {
            Ok(()) => {
                tracing::info!(store = probe.name(), attempt, "Store is ready");
                return Ok(());
            }
            Err(err) if !err.is_transient() => {
                tracing::error!(
                    store = probe.name(),
                    attempt,
                    error = %err,
                    "Store check failed with a non-retryable error"
                );
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(
                    store = probe.name(),
                    attempt,
                    max_attempts,
                    error = %err,
                    "Store not ready, retrying"
                );
                last_error = err.to_string();
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(policy.backoff).await;
        }
    }

    Err(Error::StoreUnavailable {
        attempts: max_attempts,
        last_error,
    })
}
