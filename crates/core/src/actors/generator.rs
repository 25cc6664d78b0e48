// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generator actor
//!
//! Spawns immigrants at random intervals up to the target count, then
//! waits for every one of them to terminate. A spawn failure cancels the
//! run; already-spawned immigrants observe the token at their next
//! blocking step, so joining them still terminates.

use crate::actors::Immigrant;
use crate::error::SimError;
use crate::office::Office;
use crate::pace::Pace;
use crate::spawn::Spawner;
use std::sync::Arc;

pub struct Generator {
    office: Arc<Office>,
    count: u32,
    gen_pace: Pace,
    cert_pace: Pace,
}

impl Generator {
    pub fn new(office: Arc<Office>, count: u32, gen_pace: Pace, cert_pace: Pace) -> Self {
        Self {
            office,
            count,
            gen_pace,
            cert_pace,
        }
    }

    /// Spawn and then join all immigrants. A fatal error cancels the run
    /// so peers do not block forever.
    pub async fn run(self, spawner: Arc<dyn Spawner>) -> Result<(), SimError> {
        let office = Arc::clone(&self.office);
        let result = self.generate(spawner).await;
        if let Err(err) = &result {
            if !matches!(err, SimError::Cancelled) {
                tracing::error!(error = %err, "generator failed, cancelling run");
                office.cancel.cancel();
            }
        }
        result
    }

    async fn generate(&self, spawner: Arc<dyn Spawner>) -> Result<(), SimError> {
        let cancel = self.office.cancel.clone();
        let mut handles = Vec::with_capacity(self.count as usize);
        let mut spawn_failure = None;

        for id in 1..=self.count {
            self.gen_pace.rest().await;
            if cancel.is_cancelled() {
                break;
            }
            let immigrant = Immigrant::new(id, Arc::clone(&self.office), self.cert_pace);
            match spawner.spawn("immigrant", Box::pin(immigrant.run())) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    tracing::error!(id, error = %err, "immigrant spawn failed, cancelling run");
                    cancel.cancel();
                    spawn_failure = Some(err);
                    break;
                }
            }
        }

        let mut first_error = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(())) | Ok(Err(SimError::Cancelled)) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(join) => {
                    if first_error.is_none() {
                        first_error = Some(join.into());
                    }
                }
            }
        }

        if let Some(err) = spawn_failure {
            return Err(SimError::Spawn(err));
        }
        if let Some(err) = first_error {
            return Err(err);
        }
        if cancel.is_cancelled() {
            return Err(SimError::Cancelled);
        }
        Ok(())
    }
}
