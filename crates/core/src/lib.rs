// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! hall-core: the immigration-office rendezvous protocol
//!
//! One judge task periodically admits and confirms batches of immigrant
//! tasks that independently enter a building, check in, wait for
//! confirmation, and leave. This crate provides:
//! - The shared office state and the gates that guard it
//! - The immigrant, judge, and generator actors
//! - The supervisor that runs a whole simulation
//! - The totally ordered, flushed-per-line action journal

pub mod actors;
pub mod config;
pub mod coordination;
pub mod error;
pub mod journal;
pub mod office;
pub mod pace;
pub mod spawn;
pub mod supervisor;

// Re-exports
pub use config::{ConfigError, SimConfig, DELAY_CEILING};
pub use coordination::{CancelToken, Gate, GatePass};
pub use error::{SimError, SpawnError};
pub use journal::{Action, Actor, Counters, Journal, MemorySink, Record};
pub use office::Office;
pub use pace::Pace;
pub use spawn::{FlakySpawner, Spawner, TokioSpawner};
pub use supervisor::RunReport;
