// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Randomized pacing for actor delays

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Sleeps a uniform random duration in `[0, max]` per rest.
#[derive(Debug, Clone, Copy)]
pub struct Pace {
    max: Duration,
}

impl Pace {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    /// A pace that never sleeps.
    pub fn none() -> Self {
        Self {
            max: Duration::ZERO,
        }
    }

    pub async fn rest(&self) {
        if self.max.is_zero() {
            return;
        }
        // ThreadRng is not Send; draw before awaiting
        let micros = rand::rng().random_range(0..=self.max.as_micros() as u64);
        sleep(Duration::from_micros(micros)).await;
    }
}
