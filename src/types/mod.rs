// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Agent configuration and environment assignment types.

pub mod agent;

pub use agent::{AgentConfig, EnvAssignment};
