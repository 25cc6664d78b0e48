// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the simulation core

use thiserror::Error;

/// Errors that can occur while a simulation is running.
#[derive(Debug, Error)]
pub enum SimError {
    /// The run was cancelled: a spawn failed or a peer hit a fatal error.
    #[error("run cancelled")]
    Cancelled,
    /// Writing to the action journal failed. Fatal for the whole run.
    #[error("journal write failed: {0}")]
    Journal(#[from] std::io::Error),
    /// Actor creation failed.
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    /// The run configuration did not validate.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    /// A gate was closed while an actor still needed it.
    #[error("gate closed")]
    GateClosed,
    /// An actor task panicked or was aborted.
    #[error("actor task failed: {0}")]
    Join(String),
}

impl From<tokio::sync::AcquireError> for SimError {
    fn from(_: tokio::sync::AcquireError) -> Self {
        SimError::GateClosed
    }
}

impl From<tokio::task::JoinError> for SimError {
    fn from(err: tokio::task::JoinError) -> Self {
        SimError::Join(err.to_string())
    }
}

/// Actor creation failure, the one externally expected failure mode.
#[derive(Debug, Error)]
#[error("failed to spawn {actor}: {reason}")]
pub struct SpawnError {
    /// Which actor kind was being created.
    pub actor: &'static str,
    /// Why the spawn was refused.
    pub reason: String,
}
