// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::injector;
use crate::types::AgentConfig;
use anyhow::{Context, Result};
use std::{env, fs};
use tracing::debug;

/// Injector configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Vault address for agents that do not set their own
    pub vault_address: Option<String>,
    /// CA certificate supplied by the injector, PEM or base64 of PEM
    pub ca_cert: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let vault_address = non_empty(injector::VAULT_ADDR);

        // Inline bytes take precedence over the certificate file
        let ca_cert = match non_empty(injector::CACERT_BYTES) {
            Some(bytes) => Some(bytes),
            None => match non_empty(injector::CACERT_FILE) {
                Some(path) => Some(fs::read_to_string(&path).with_context(|| {
                    format!(
                        "failed to read {} from {}",
                        injector::CACERT_FILE,
                        path
                    )
                })?),
                None => None,
            },
        };

        debug!(
            "Injector configuration loaded: vault_address={:?}, ca_cert={}",
            vault_address,
            ca_cert.is_some()
        );

        Ok(Config {
            vault_address,
            ca_cert,
        })
    }

    /// Fill agent fields the injector provides, keeping anything already set
    pub fn apply_defaults(&self, agent: &mut AgentConfig) {
        if agent.vault_address.as_deref().unwrap_or_default().is_empty() {
            agent.vault_address = self.vault_address.clone();
        }
        if agent
            .injector_supplied_ca_cert
            .as_deref()
            .unwrap_or_default()
            .is_empty()
        {
            agent.injector_supplied_ca_cert = self.ca_cert.clone();
        }
    }
}
