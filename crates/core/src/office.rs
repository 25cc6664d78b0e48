// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared office state and the gates that guard it
//!
//! Counter mutations and the journal line describing them happen inside
//! one critical section, so journal order always matches mutation order.
//! No actor holds the state lock across an `.await`.

use crate::coordination::{CancelToken, Gate};
use crate::journal::{Action, Actor, Counters, Journal};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Notify, Semaphore};

/// Counters and journal behind the state lock.
struct OfficeState {
    /// Next journal sequence number. Starts at 1, never repeats.
    action_count: u64,
    /// Immigrants inside, not yet confirmed.
    waiting: u32,
    /// Immigrants inside who have completed check-in, not yet confirmed.
    checked_in: u32,
    /// Immigrants inside the building.
    inside: u32,
    /// True while the judge occupies the building.
    judge_present: bool,
    /// Total confirmed across all cycles.
    confirmed_total: u32,
    journal: Journal,
}

impl OfficeState {
    fn record(&mut self, actor: Actor, action: Action) -> io::Result<()> {
        debug_assert!(self.checked_in <= self.waiting && self.waiting <= self.inside);
        let counters = (!action.is_terse()).then_some(Counters {
            waiting: self.waiting,
            checked_in: self.checked_in,
            inside: self.inside,
        });
        self.journal.append(self.action_count, actor, action, counters)?;
        self.action_count += 1;
        Ok(())
    }
}

/// The office: shared counters plus every gate in the protocol.
pub struct Office {
    state: Mutex<OfficeState>,
    /// Building door. One crossing at a time; the judge holds it for the
    /// whole visit, which keeps entries from racing a batch snapshot.
    pub(crate) door: Gate,
    /// Check-in desk, one immigrant at a time.
    pub(crate) desk: Gate,
    /// Batch-ready rendezvous, signalled exactly once per judge wait by
    /// the last immigrant to check in while the judge is present.
    pub(crate) all_checked_in: Notify,
    /// Confirmation permits, one per confirmed immigrant per cycle.
    pub(crate) confirmations: Semaphore,
    /// Signalled on every exit so the judge can wait for the building to
    /// empty before finishing.
    pub(crate) vacated: Notify,
    pub(crate) cancel: CancelToken,
}

impl Office {
    pub fn new(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(OfficeState {
                action_count: 1,
                waiting: 0,
                checked_in: 0,
                inside: 0,
                judge_present: false,
                confirmed_total: 0,
                journal,
            }),
            door: Gate::new(),
            desk: Gate::new(),
            all_checked_in: Notify::new(),
            confirmations: Semaphore::new(0),
            vacated: Notify::new(),
            cancel: CancelToken::new(),
        })
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    fn lock(&self) -> MutexGuard<'_, OfficeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Log an action with no counter change.
    pub fn record(&self, actor: Actor, action: Action) -> io::Result<()> {
        self.lock().record(actor, action)
    }

    /// An immigrant crossed the door inward.
    pub fn immigrant_entered(&self, id: u32) -> io::Result<()> {
        let mut state = self.lock();
        state.inside += 1;
        state.waiting += 1;
        state.record(Actor::Immigrant(id), Action::Enters)
    }

    /// An immigrant completed check-in. The last one to do so while the
    /// judge waits inside wakes the judge; `Notify` stores the permit, so
    /// the signal cannot be lost if it lands before the judge's await.
    pub fn immigrant_checked_in(&self, id: u32) -> io::Result<()> {
        let mut state = self.lock();
        state.checked_in += 1;
        state.record(Actor::Immigrant(id), Action::Checks)?;
        if state.judge_present && state.waiting == state.checked_in {
            self.all_checked_in.notify_one();
        }
        Ok(())
    }

    /// An immigrant crossed the door outward.
    pub fn immigrant_left(&self, id: u32) -> io::Result<()> {
        let mut state = self.lock();
        state.inside -= 1;
        state.record(Actor::Immigrant(id), Action::Leaves)?;
        self.vacated.notify_one();
        Ok(())
    }

    /// The judge entered. Returns how many immigrants inside still have
    /// to check in; computed under the same lock hold that publishes
    /// `judge_present`, so no check-in can interleave.
    pub fn judge_entered(&self) -> io::Result<u32> {
        let mut state = self.lock();
        state.judge_present = true;
        state.record(Actor::Judge, Action::Enters)?;
        Ok(state.waiting - state.checked_in)
    }

    pub fn judge_waits(&self) -> io::Result<()> {
        self.lock().record(Actor::Judge, Action::WaitsForImmigrants)
    }

    pub fn confirmation_started(&self) -> io::Result<()> {
        self.lock().record(Actor::Judge, Action::StartsConfirmation)
    }

    /// Commit the batch: snapshot the checked-in count, reset both
    /// queues, and release exactly one confirmation permit per member.
    /// Returns the batch size.
    pub fn confirmation_committed(&self) -> io::Result<u32> {
        let mut state = self.lock();
        let batch = state.checked_in;
        state.waiting = 0;
        state.checked_in = 0;
        state.confirmed_total += batch;
        self.confirmations.add_permits(batch as usize);
        state.record(Actor::Judge, Action::EndsConfirmation)?;
        Ok(batch)
    }

    /// The judge left the building.
    pub fn judge_left(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.record(Actor::Judge, Action::Leaves)?;
        state.judge_present = false;
        Ok(())
    }

    pub fn confirmed_total(&self) -> u32 {
        self.lock().confirmed_total
    }

    pub fn judge_present(&self) -> bool {
        self.lock().judge_present
    }

    /// Counter snapshot, for the judge's empty-building check and tests.
    pub fn snapshot(&self) -> Counters {
        let state = self.lock();
        Counters {
            waiting: state.waiting,
            checked_in: state.checked_in,
            inside: state.inside,
        }
    }
}

#[cfg(test)]
#[path = "office_tests.rs"]
mod tests;
