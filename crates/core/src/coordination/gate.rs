// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary gate over a one-permit semaphore

use std::sync::Arc;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// A gate admits one actor at a time. Dropping the returned pass reopens
/// the gate for the next actor.
#[derive(Clone, Debug)]
pub struct Gate {
    slot: Arc<Semaphore>,
}

/// Proof of passage through a gate, held for the duration of the crossing.
#[derive(Debug)]
pub struct GatePass {
    _permit: OwnedSemaphorePermit,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// Wait for the gate and pass through it.
    pub async fn pass(&self) -> Result<GatePass, AcquireError> {
        let permit = Arc::clone(&self.slot).acquire_owned().await?;
        Ok(GatePass { _permit: permit })
    }

    /// Whether some actor currently holds the gate.
    pub fn is_held(&self) -> bool {
        self.slot.available_permits() == 0
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
