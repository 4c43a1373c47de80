// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of the environment injected into the Vault agent container.

pub mod rules;

use crate::error::Result;
use crate::kubernetes::ExistingEnv;
use crate::types::{AgentConfig, EnvAssignment};
use rules::{RuleContext, RULES};
use tracing::{debug, instrument};

/// Resolve the agent container's environment from its configuration and the
/// environment already present on the target Pod.
///
/// Every rule in [`RULES`] is evaluated in order and contributes at most one
/// assignment. Rule names are distinct, so the result never holds the same
/// variable twice. Any rule error aborts resolution without partial output.
///
/// `init_container` is accepted for both init and sidecar agents; it does not
/// change the emitted variables.
#[instrument(skip(config, pod))]
pub fn resolve_container_env(
    config: &AgentConfig,
    pod: &dyn ExistingEnv,
    init_container: bool,
) -> Result<Vec<EnvAssignment>> {
    let ctx = RuleContext {
        config,
        pod,
        init_container,
    };

    let mut envs = Vec::new();
    for rule in RULES {
        if let Some(value) = (rule.eval)(&ctx)? {
            debug!("Setting {} for agent container", rule.name);
            envs.push(EnvAssignment::new(rule.name, value));
        }
    }

    Ok(envs)
}
