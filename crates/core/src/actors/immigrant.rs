// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immigrant actor
//!
//! Enter the building, check in, wait for confirmation, collect the
//! certificate, leave. Every blocking step races the cancel token, so a
//! failed run never leaves an immigrant parked on a gate.

use crate::error::SimError;
use crate::journal::{Action, Actor};
use crate::office::Office;
use crate::pace::Pace;
use std::sync::Arc;

pub struct Immigrant {
    id: u32,
    office: Arc<Office>,
    cert_pace: Pace,
}

impl Immigrant {
    pub fn new(id: u32, office: Arc<Office>, cert_pace: Pace) -> Self {
        Self {
            id,
            office,
            cert_pace,
        }
    }

    /// Drive the actor through its whole visit. A fatal error cancels the
    /// run so peers do not block forever.
    pub async fn run(self) -> Result<(), SimError> {
        let result = self.visit().await;
        if let Err(err) = &result {
            if !matches!(err, SimError::Cancelled) {
                tracing::error!(id = self.id, error = %err, "immigrant failed, cancelling run");
                self.office.cancel.cancel();
            }
        }
        result
    }

    async fn visit(&self) -> Result<(), SimError> {
        let me = Actor::Immigrant(self.id);
        let office = &self.office;
        let cancel = &office.cancel;

        if cancel.is_cancelled() {
            return Err(SimError::Cancelled);
        }
        office.record(me, Action::Starts)?;
        office.record(me, Action::WantsToEnter)?;

        let pass = tokio::select! {
            _ = cancel.cancelled() => return Err(SimError::Cancelled),
            pass = office.door.pass() => pass?,
        };
        office.immigrant_entered(self.id)?;
        // the door is only held for the crossing, not the whole visit
        drop(pass);

        let desk = tokio::select! {
            _ = cancel.cancelled() => return Err(SimError::Cancelled),
            desk = office.desk.pass() => desk?,
        };
        office.immigrant_checked_in(self.id)?;
        drop(desk);

        // May park indefinitely until a judge cycle confirms this batch.
        tokio::select! {
            _ = cancel.cancelled() => return Err(SimError::Cancelled),
            permit = office.confirmations.acquire() => permit?.forget(),
        }

        office.record(me, Action::WantsCertificate)?;
        self.cert_pace.rest().await;
        office.record(me, Action::GotCertificate)?;

        let pass = tokio::select! {
            _ = cancel.cancelled() => return Err(SimError::Cancelled),
            pass = office.door.pass() => pass?,
        };
        office.immigrant_left(self.id)?;
        drop(pass);

        Ok(())
    }
}
