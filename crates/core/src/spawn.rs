// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor spawning adapter
//!
//! Spawning goes through a trait so the resource-exhaustion path has a
//! seam: the real spawner defers to tokio, the flaky one fails on demand.

use crate::error::{SimError, SpawnError};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::task::JoinHandle;

/// Boxed actor body, as accepted by [`Spawner::spawn`].
pub type ActorFuture = Pin<Box<dyn Future<Output = Result<(), SimError>> + Send>>;

pub trait Spawner: Send + Sync {
    /// Schedule an actor, returning its join handle.
    fn spawn(
        &self,
        actor: &'static str,
        task: ActorFuture,
    ) -> Result<JoinHandle<Result<(), SimError>>, SpawnError>;
}

/// Real spawner backed by the tokio runtime.
pub struct TokioSpawner;

impl Spawner for TokioSpawner {
    fn spawn(
        &self,
        _actor: &'static str,
        task: ActorFuture,
    ) -> Result<JoinHandle<Result<(), SimError>>, SpawnError> {
        Ok(tokio::spawn(task))
    }
}

/// Spawner that honors a fixed number of spawns, then fails every
/// request. Failure injection for the resource-exhaustion teardown path.
pub struct FlakySpawner {
    budget: AtomicU32,
}

impl FlakySpawner {
    /// Allows `budget` spawns before failing.
    pub fn new(budget: u32) -> Self {
        Self {
            budget: AtomicU32::new(budget),
        }
    }
}

impl Spawner for FlakySpawner {
    fn spawn(
        &self,
        actor: &'static str,
        task: ActorFuture,
    ) -> Result<JoinHandle<Result<(), SimError>>, SpawnError> {
        let allowed = self
            .budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| b.checked_sub(1))
            .is_ok();
        if allowed {
            Ok(tokio::spawn(task))
        } else {
            Err(SpawnError {
                actor,
                reason: "spawn budget exhausted".to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "spawn_tests.rs"]
mod tests;
