// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level orchestration
//!
//! Builds the office, runs judge and generator, joins both, and maps the
//! outcome to a [`RunReport`]. Gates, state, and journal are owned by the
//! office, so teardown happens exactly once on every exit path when the
//! last `Arc` drops.

use crate::actors::{Generator, Judge};
use crate::config::SimConfig;
use crate::coordination::CancelToken;
use crate::error::SimError;
use crate::journal::Journal;
use crate::office::Office;
use crate::pace::Pace;
use crate::spawn::Spawner;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Outcome of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Immigrants confirmed across all judge cycles.
    pub confirmed: u32,
    /// True if the run was cancelled: spawn failure or a fatal actor
    /// error. The journal still holds everything logged before that.
    pub failed: bool,
}

/// Run one whole simulation.
pub async fn run(
    config: &SimConfig,
    journal: Journal,
    spawner: Arc<dyn Spawner>,
) -> Result<RunReport, SimError> {
    config.validate()?;

    let office = Office::new(journal);
    let cancel = office.cancel_token();

    let judge = Judge::new(
        Arc::clone(&office),
        config.immigrants,
        Pace::new(config.judge_delay_max),
        Pace::new(config.cert_delay_max),
    );
    let judge_handle = match spawner.spawn("judge", Box::pin(judge.run())) {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(error = %err, "judge spawn failed");
            cancel.cancel();
            return Ok(RunReport {
                confirmed: 0,
                failed: true,
            });
        }
    };

    let generator = Generator::new(
        Arc::clone(&office),
        config.immigrants,
        Pace::new(config.gen_delay_max),
        Pace::new(config.cert_delay_max),
    );
    let generator_task = {
        let spawner = Arc::clone(&spawner);
        Box::pin(generator.run(spawner))
    };
    let generator_handle = match spawner.spawn("generator", generator_task) {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(error = %err, "generator spawn failed");
            cancel.cancel();
            join_actor("judge", judge_handle, &cancel).await;
            return Ok(RunReport {
                confirmed: office.confirmed_total(),
                failed: true,
            });
        }
    };

    join_actor("generator", generator_handle, &cancel).await;
    join_actor("judge", judge_handle, &cancel).await;

    Ok(RunReport {
        confirmed: office.confirmed_total(),
        failed: cancel.is_cancelled(),
    })
}

async fn join_actor(
    actor: &'static str,
    handle: JoinHandle<Result<(), SimError>>,
    cancel: &CancelToken,
) {
    match handle.await {
        Ok(Ok(())) => {}
        Ok(Err(SimError::Cancelled)) => tracing::debug!(actor, "actor cancelled"),
        Ok(Err(err)) => tracing::warn!(actor, error = %err, "actor failed"),
        Err(err) => {
            // A panicked actor never reached its own cancel path; cancel
            // here so the surviving peer can unwind.
            tracing::error!(actor, error = %err, "actor panicked");
            cancel.cancel();
        }
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
