// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cacert;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod env;
pub mod error;
pub mod kubernetes;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use encoding::is_base64_encoded;
pub use env::resolve_container_env;
pub use error::{InjectError, Result};
pub use kubernetes::{pod_container_env, ExistingEnv};
pub use types::{AgentConfig, EnvAssignment};
