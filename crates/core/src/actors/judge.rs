// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Judge actor
//!
//! Per cycle: close the door, wait until everyone inside has checked in,
//! confirm the batch, reopen, repeat until the target count is confirmed.
//! Holding the door for the entire visit is what makes the batch snapshot
//! exact: no entry can race past the judge.

use crate::error::SimError;
use crate::journal::{Action, Actor};
use crate::office::Office;
use crate::pace::Pace;
use std::sync::Arc;

pub struct Judge {
    office: Arc<Office>,
    target: u32,
    entry_pace: Pace,
    cert_pace: Pace,
}

impl Judge {
    pub fn new(office: Arc<Office>, target: u32, entry_pace: Pace, cert_pace: Pace) -> Self {
        Self {
            office,
            target,
            entry_pace,
            cert_pace,
        }
    }

    /// Run cycles until exactly `target` immigrants have been confirmed,
    /// then wait for the building to empty and finish. A fatal error
    /// cancels the run so peers do not block forever.
    pub async fn run(self) -> Result<(), SimError> {
        let result = self.preside().await;
        if let Err(err) = &result {
            if !matches!(err, SimError::Cancelled) {
                tracing::error!(error = %err, "judge failed, cancelling run");
                self.office.cancel.cancel();
            }
        }
        result
    }

    async fn preside(&self) -> Result<(), SimError> {
        let office = &self.office;
        let cancel = &office.cancel;
        let mut confirmed: u32 = 0;

        while confirmed < self.target {
            self.entry_pace.rest().await;
            if cancel.is_cancelled() {
                return Err(SimError::Cancelled);
            }
            office.record(Actor::Judge, Action::WantsToEnter)?;

            // Closes the door to entries and exits for the whole visit.
            let door = tokio::select! {
                _ = cancel.cancelled() => return Err(SimError::Cancelled),
                door = office.door.pass() => door?,
            };

            let uncommitted = office.judge_entered()?;
            if uncommitted > 0 {
                office.judge_waits()?;
                tokio::select! {
                    _ = cancel.cancelled() => return Err(SimError::Cancelled),
                    _ = office.all_checked_in.notified() => {}
                }
            }

            office.confirmation_started()?;
            self.cert_pace.rest().await;
            let batch = office.confirmation_committed()?;
            confirmed += batch;
            tracing::debug!(batch, confirmed, target = self.target, "confirmation cycle");

            self.cert_pace.rest().await;
            office.judge_left()?;
            drop(door);
        }

        // Do not finish until the last confirmed immigrant is out the
        // door; each exit signals `vacated`, and a stored permit only
        // causes a recheck.
        loop {
            if office.snapshot().inside == 0 {
                break;
            }
            tokio::select! {
                _ = cancel.cancelled() => return Err(SimError::Cancelled),
                _ = office.vacated.notified() => {}
            }
        }

        office.record(Actor::Judge, Action::Finishes)?;
        Ok(())
    }
}
