// Retry policy with exponential backoff and jitter
use std::time::Duration;

use contactsync_domain::constants::{DEFAULT_SYNC_JITTER_MS, RETRYABLE_CLIENT_STATUSES};
use contactsync_domain::NusacontactConfig;
use rand::Rng;

/// Largest exponent applied to the base delay; larger attempts saturate.
const MAX_BACKOFF_EXPONENT: u32 = 31;

/// What a response status means for the delivery loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// `[200, 400)`
    Success,
    /// 5xx, a listed 4xx, or anything else that is neither success nor a
    /// terminal 4xx
    Retryable,
    /// Any 4xx not in the retryable list
    Terminal,
}

/// Attempt budget, backoff and status classification for contact delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    jitter: Duration,
    retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&NusacontactConfig::default())
    }
}

impl RetryPolicy {
    /// Policy with the default jitter ceiling and retryable statuses.
    ///
    /// `max_attempts` counts the initial try and is raised to at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            jitter: Duration::from_millis(DEFAULT_SYNC_JITTER_MS),
            retryable_statuses: RETRYABLE_CLIENT_STATUSES.to_vec(),
        }
    }

    /// Policy built from the NusaContact delivery settings.
    pub fn from_config(config: &NusacontactConfig) -> Self {
        Self::new(config.max_attempts, config.base_delay()).with_jitter(config.jitter())
    }

    /// Upper bound (exclusive) of the random delay added to each backoff.
    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Replace the 4xx statuses that are retried instead of stopping.
    pub fn with_retryable_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retryable_statuses = statuses.into();
        self
    }

    /// Total attempts allowed, the first one included.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the first retry.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Jitter ceiling added to each backoff.
    pub fn jitter(&self) -> Duration {
        self.jitter
    }

    /// Sort a response status into success, retry or stop.
    pub fn classify(&self, status: u16) -> StatusClass {
        match status {
            200..=399 => StatusClass::Success,
            400..=499 if self.retryable_statuses.contains(&status) => StatusClass::Retryable,
            400..=499 => StatusClass::Terminal,
            _ => StatusClass::Retryable,
        }
    }

    /// Whether another attempt may follow attempt number `attempt` (1-based).
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// `base_delay * 2^(attempt - 1)`, saturating instead of overflowing.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
        let base_millis = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_millis.saturating_mul(2_u64.saturating_pow(exponent)))
    }

    /// Backoff for `attempt` plus a uniform random jitter in `[0, jitter)`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff(attempt).saturating_add(self.sample_jitter())
    }

    fn sample_jitter(&self) -> Duration {
        let ceiling = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if ceiling == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..ceiling))
    }
}
