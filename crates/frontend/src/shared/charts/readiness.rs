//! Bounded wait for the charting library script to finish loading.

use crate::shared::timers::Timers;
use contracts::shared::config::TimingConfig;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl From<&TimingConfig> for RetryPolicy {
    fn from(timing: &TimingConfig) -> Self {
        Self {
            interval_ms: timing.poll_interval_ms,
            max_attempts: timing.max_poll_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadinessError {
    #[error("Chart.js failed to load after {attempts} attempts")]
    TimedOut { attempts: u32 },
}

/// Probes `ready` once per interval, waiting before each probe, until it
/// returns true or the attempts run out. Returns the number of probes made.
pub async fn wait_until_ready<P, T>(
    mut ready: P,
    policy: RetryPolicy,
    timers: &T,
) -> Result<u32, ReadinessError>
where
    P: FnMut() -> bool,
    T: Timers,
{
    let mut attempts = 0;
    loop {
        timers.sleep(policy.interval_ms).await;
        attempts += 1;
        if ready() {
            log::debug!("Chart.js available after {} attempt(s)", attempts);
            return Ok(attempts);
        }
        if attempts >= policy.max_attempts {
            return Err(ReadinessError::TimedOut { attempts });
        }
    }
}
