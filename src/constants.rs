// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variable names set on the injected agent container
pub mod env {
    pub const VAULT_CONFIG: &str = "VAULT_CONFIG";
    pub const VAULT_ADDR: &str = "VAULT_ADDR";
    pub const VAULT_SKIP_VERIFY: &str = "VAULT_SKIP_VERIFY";
    pub const VAULT_CACERT: &str = "VAULT_CACERT";
    /// Injector-supplied certificate content, written to disk by the agent entrypoint
    pub const CACERT: &str = "CACERT";
    pub const VAULT_MAX_RETRIES: &str = "VAULT_MAX_RETRIES";
    pub const VAULT_CLIENT_TIMEOUT: &str = "VAULT_CLIENT_TIMEOUT";
    pub const GOMAXPROCS: &str = "GOMAXPROCS";
    pub const VAULT_LOG_LEVEL: &str = "VAULT_LOG_LEVEL";
    pub const HTTPS_PROXY: &str = "HTTPS_PROXY";
    pub const AWS_ROLE_ARN: &str = "AWS_ROLE_ARN";
    pub const AWS_WEB_IDENTITY_TOKEN_FILE: &str = "AWS_WEB_IDENTITY_TOKEN_FILE";
    pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
    pub const AWS_REGION: &str = "AWS_REGION";
}

/// Vault auth method identifiers
pub mod auth {
    /// AWS auth, with IRSA credentials projected into the Pod
    pub const AWS: &str = "aws";
    /// Key in the auth config overriding the region taken from the Pod
    pub const REGION_KEY: &str = "region";
}

/// Path of the rendered agent configuration inside the agent container
pub const AGENT_CONFIG_PATH: &str = "/home/vault/config.json";

/// Value of VAULT_SKIP_VERIFY in config-map mode
pub const SKIP_VERIFY_CONFIG_MAP: &str = "true";

/// Injector environment variables read by [`crate::config::Config`]
pub mod injector {
    pub const VAULT_ADDR: &str = "AGENT_INJECT_VAULT_ADDR";
    pub const CACERT_BYTES: &str = "AGENT_INJECT_VAULT_CACERT_BYTES";
    pub const CACERT_FILE: &str = "AGENT_INJECT_VAULT_CACERT_FILE";
}
