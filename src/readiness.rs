//! Polling helper for gating integration tests on service readiness.
//!
//! Polls an async check until it reports ready or the deadline passes; a
//! missed deadline is a hard failure, never retried beyond the polling loop.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{Result, TelemetryError};

/// Deadline and cadence for a readiness wait.
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            interval: Duration::from_secs(1),
        }
    }
}

/// Polls `check` until it returns true or `options.timeout` elapses.
///
/// A check that fails internally should return false; the loop treats any
/// non-ready poll the same way and keeps waiting.
pub async fn wait_for_service<F, Fut>(
    service: &str,
    options: WaitOptions,
    mut check: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = Instant::now();

    while start.elapsed() < options.timeout {
        if check().await {
            debug!(
                service = %service,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "service ready"
            );
            return Ok(());
        }
        sleep(options.interval).await;
    }

    Err(TelemetryError::ReadinessTimeout {
        service: service.to_string(),
        timeout_secs: options.timeout.as_secs(),
    })
}
