// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::auth;
use crate::error::{InjectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declarative configuration of the Vault agent injected into a Pod.
///
/// Every field is optional. A field holding an empty string counts as unset,
/// while any other value (including `"0"`) is an explicit setting.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Address of the Vault server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<String>,
    /// Vault auth method, e.g. `aws`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    /// Method-specific auth parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_config: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_max_retries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    /// Path of a CA certificate already present in the agent image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert_path: Option<String>,
    /// Certificate content provided by the injector, used when `ca_cert_path` is unset
    #[serde(
        rename = "injectorSuppliedCACert",
        skip_serializing_if = "Option::is_none"
    )]
    pub injector_supplied_ca_cert: Option<String>,
    /// Config map holding the full agent configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_max_procs: Option<String>,
}

impl AgentConfig {
    /// Whether the agent configuration comes from a config map instead of being rendered
    pub fn uses_config_map(&self) -> bool {
        present(&self.config_map_name).is_some()
    }

    /// Whether the agent authenticates with the AWS method
    pub fn uses_aws_auth(&self) -> bool {
        present(&self.auth_type) == Some(auth::AWS)
    }

    /// Region set in the auth config, if any.
    ///
    /// A null region is treated as absent. Any other non-string value is rejected.
    pub fn auth_config_region(&self) -> Result<Option<&str>> {
        let region = self
            .auth_config
            .as_ref()
            .and_then(|c| c.get(auth::REGION_KEY));

        match region {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(r)) => Ok(Some(r.as_str())),
            Some(other) => Err(InjectError::InvalidAuthConfig(format!(
                "'{}' must be a string, got {}",
                auth::REGION_KEY,
                other
            ))),
        }
    }
}

/// Returns the field value when it is set to a non-empty string
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// A single environment variable assignment for the agent container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvAssignment {
    pub name: String,
    pub value: String,
}

impl EnvAssignment {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
