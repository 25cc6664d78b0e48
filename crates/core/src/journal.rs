// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only action journal
//!
//! Every observable transition in a run lands here as one line, stamped
//! with a strictly increasing sequence number and flushed immediately so
//! partial runs stay inspectable.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Who performed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Judge,
    Immigrant(u32),
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Judge => write!(f, "JUDGE"),
            Actor::Immigrant(id) => write!(f, "IMM {id}"),
        }
    }
}

/// The action vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Starts,
    WantsToEnter,
    Enters,
    Checks,
    WantsCertificate,
    GotCertificate,
    WaitsForImmigrants,
    StartsConfirmation,
    EndsConfirmation,
    Leaves,
    Finishes,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Starts => "starts",
            Action::WantsToEnter => "wants to enter",
            Action::Enters => "enters",
            Action::Checks => "checks",
            Action::WantsCertificate => "wants certificate",
            Action::GotCertificate => "got certificate",
            Action::WaitsForImmigrants => "waits for imm",
            Action::StartsConfirmation => "starts confirmation",
            Action::EndsConfirmation => "ends confirmation",
            Action::Leaves => "leaves",
            Action::Finishes => "finishes",
        }
    }

    /// Terse actions log without the counter columns.
    pub fn is_terse(self) -> bool {
        matches!(self, Action::Starts | Action::WantsToEnter | Action::Finishes)
    }
}

/// Counter snapshot attached to detailed journal lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    /// Immigrants inside, not yet confirmed.
    pub waiting: u32,
    /// Immigrants inside who have checked in, not yet confirmed.
    pub checked_in: u32,
    /// Immigrants inside the building.
    pub inside: u32,
}

/// Serialized writer for the action journal.
///
/// Callers are expected to hold the state lock across `append`, so line
/// order matches the order of the critical sections being described.
pub struct Journal {
    sink: Box<dyn Write + Send>,
}

impl Journal {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    /// Journal writing to a file, created or truncated.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Box::new(File::create(path)?)))
    }

    /// Append one line and flush it.
    pub fn append(
        &mut self,
        seq: u64,
        actor: Actor,
        action: Action,
        counters: Option<Counters>,
    ) -> io::Result<()> {
        match counters {
            Some(c) => writeln!(
                self.sink,
                "{seq}\t: {actor}\t: {}\t: {}\t: {}\t: {}",
                action.name(),
                c.waiting,
                c.checked_in,
                c.inside
            )?,
            None => writeln!(self.sink, "{seq}\t: {actor}\t: {}", action.name())?,
        }
        self.sink.flush()
    }
}

/// A parsed journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub seq: u64,
    pub actor: Actor,
    pub action: String,
    pub counters: Option<Counters>,
}

impl Record {
    /// Parse one journal line. Returns `None` for lines that do not match
    /// the format.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split("\t: ");
        let seq = fields.next()?.trim().parse().ok()?;
        let actor = fields.next()?.trim();
        let actor = if actor == "JUDGE" {
            Actor::Judge
        } else {
            Actor::Immigrant(actor.strip_prefix("IMM ")?.trim().parse().ok()?)
        };
        let action = fields.next()?.trim().to_string();
        let rest: Vec<&str> = fields.collect();
        let counters = match rest.as_slice() {
            [] => None,
            [w, c, i] => Some(Counters {
                waiting: w.trim().parse().ok()?,
                checked_in: c.trim().parse().ok()?,
                inside: i.trim().parse().ok()?,
            }),
            _ => return None,
        };
        Some(Self {
            seq,
            actor,
            action,
            counters,
        })
    }
}

/// In-memory journal sink, cloneable so tests can read back what a run
/// wrote.
#[derive(Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<u8>>>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Every line that parses as a journal record, in order.
    pub fn records(&self) -> Vec<Record> {
        self.contents().lines().filter_map(Record::parse).collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
