// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization primitives shared by all actors

mod cancel;
mod gate;

pub use cancel::CancelToken;
pub use gate::{Gate, GatePass};
