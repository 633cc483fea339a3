//! Simulated reply latency.

use rand::Rng;
use std::time::Duration;

use crate::config::ChatbotConfig;

/// Uniform delay range the typing indicator stays up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min: Duration,
    max: Duration,
}

impl TypingDelay {
    /// Range `[min, max]`; returns None when `min > max`.
    pub fn new(min: Duration, max: Duration) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Always waits exactly `delay`.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn from_config(config: &ChatbotConfig) -> anyhow::Result<Self> {
        Self::new(config.typing_min(), config.typing_max()).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid typing delay range: {}ms..{}ms",
                config.typing_min_ms,
                config.typing_max_ms
            )
        })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draws one delay uniformly from the range.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(1000),
            max: Duration::from_millis(2000),
        }
    }
}
