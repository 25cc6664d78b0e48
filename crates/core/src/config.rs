// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration and validation

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on every delay setting.
pub const DELAY_CEILING: Duration = Duration::from_millis(2000);

/// Parameters of one simulation run.
///
/// Deserializable so a run can be described by a TOML file; durations use
/// humantime strings (`"150ms"`, `"1s"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Number of immigrant actors to generate and confirm.
    pub immigrants: u32,
    /// Max delay between two immigrant spawns.
    #[serde(default, with = "humantime_serde")]
    pub gen_delay_max: Duration,
    /// Max delay before each judge entry.
    #[serde(default, with = "humantime_serde")]
    pub judge_delay_max: Duration,
    /// Max certificate-processing delay, used by the judge while
    /// confirming a batch and by immigrants collecting their certificate.
    #[serde(default, with = "humantime_serde")]
    pub cert_delay_max: Duration,
}

impl SimConfig {
    /// Config with the given target and no delays.
    pub fn new(immigrants: u32) -> Self {
        Self {
            immigrants,
            gen_delay_max: Duration::ZERO,
            judge_delay_max: Duration::ZERO,
            cert_delay_max: Duration::ZERO,
        }
    }

    pub fn with_gen_delay(mut self, max: Duration) -> Self {
        self.gen_delay_max = max;
        self
    }

    pub fn with_judge_delay(mut self, max: Duration) -> Self {
        self.judge_delay_max = max;
        self
    }

    pub fn with_cert_delay(mut self, max: Duration) -> Self {
        self.cert_delay_max = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.immigrants == 0 {
            return Err(ConfigError::NoImmigrants);
        }
        let delays = [
            ("gen_delay_max", self.gen_delay_max),
            ("judge_delay_max", self.judge_delay_max),
            ("cert_delay_max", self.cert_delay_max),
        ];
        for (field, value) in delays {
            if value > DELAY_CEILING {
                return Err(ConfigError::DelayTooLong { field, value });
            }
        }
        Ok(())
    }
}

/// Rejected run parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("immigrant count must be at least 1")]
    NoImmigrants,
    #[error("{field} is {value:?}, above the 2s ceiling")]
    DelayTooLong { field: &'static str, value: Duration },
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
