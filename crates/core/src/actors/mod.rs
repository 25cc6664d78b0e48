// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor state machines: immigrant, judge, generator

mod generator;
mod immigrant;
mod judge;

pub use generator::Generator;
pub use immigrant::Immigrant;
pub use judge::Judge;

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
