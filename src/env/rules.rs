// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered rule table mapping agent configuration and Pod state to env vars

use crate::constants::{env, AGENT_CONFIG_PATH, SKIP_VERIFY_CONFIG_MAP};
use crate::error::Result;
use crate::kubernetes::{find_existing_env, ExistingEnv};
use crate::types::agent::{present, AgentConfig};

/// Inputs available to every rule
pub struct RuleContext<'a> {
    pub config: &'a AgentConfig,
    pub pod: &'a dyn ExistingEnv,
    pub init_container: bool,
}

/// Produces the value of one environment variable, or nothing
pub type RuleFn = fn(&RuleContext<'_>) -> Result<Option<String>>;

/// A named entry of the rule table
pub struct Rule {
    pub name: &'static str,
    pub eval: RuleFn,
}

/// All rules, in output order. Each name appears once.
pub const RULES: &[Rule] = &[
    // Configuration source
    Rule { name: env::VAULT_CONFIG, eval: vault_config },
    Rule { name: env::VAULT_ADDR, eval: vault_addr },
    Rule { name: env::VAULT_SKIP_VERIFY, eval: vault_skip_verify },
    Rule { name: env::VAULT_CACERT, eval: vault_cacert },
    // Tuning
    Rule { name: env::VAULT_MAX_RETRIES, eval: client_max_retries },
    Rule { name: env::VAULT_CLIENT_TIMEOUT, eval: client_timeout },
    Rule { name: env::GOMAXPROCS, eval: go_max_procs },
    Rule { name: env::VAULT_LOG_LEVEL, eval: log_level },
    Rule { name: env::HTTPS_PROXY, eval: proxy_address },
    // TLS material
    Rule { name: env::CACERT, eval: injector_ca_cert },
    // IRSA
    Rule { name: env::AWS_ROLE_ARN, eval: aws_role_arn },
    Rule { name: env::AWS_WEB_IDENTITY_TOKEN_FILE, eval: aws_web_identity_token_file },
    Rule { name: env::AWS_DEFAULT_REGION, eval: aws_default_region },
    Rule { name: env::AWS_REGION, eval: aws_region },
];

fn field(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

fn config_map_field(ctx: &RuleContext<'_>, value: &Option<String>) -> Option<String> {
    if ctx.config.uses_config_map() {
        field(value)
    } else {
        None
    }
}

fn vault_config(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok((!ctx.config.uses_config_map()).then(|| AGENT_CONFIG_PATH.to_string()))
}

fn vault_addr(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(config_map_field(ctx, &ctx.config.vault_address))
}

// Set regardless of TLS material, the config map carries no vault stanza
fn vault_skip_verify(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(ctx
        .config
        .uses_config_map()
        .then(|| SKIP_VERIFY_CONFIG_MAP.to_string()))
}

fn vault_cacert(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(config_map_field(ctx, &ctx.config.ca_cert_path))
}

fn client_max_retries(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(field(&ctx.config.client_max_retries))
}

fn client_timeout(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(field(&ctx.config.client_timeout))
}

fn go_max_procs(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(field(&ctx.config.go_max_procs))
}

fn log_level(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(field(&ctx.config.log_level))
}

fn proxy_address(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(field(&ctx.config.proxy_address))
}

/// The user's own CA cert path always wins over the injector's certificate
fn injector_ca_cert(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    if present(&ctx.config.ca_cert_path).is_some() {
        return Ok(None);
    }
    Ok(field(&ctx.config.injector_supplied_ca_cert))
}

fn aws_from_pod(ctx: &RuleContext<'_>, name: &str) -> Option<String> {
    if ctx.config.uses_aws_auth() {
        find_existing_env(ctx.pod, name)
    } else {
        None
    }
}

fn aws_role_arn(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(aws_from_pod(ctx, env::AWS_ROLE_ARN))
}

fn aws_web_identity_token_file(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(aws_from_pod(ctx, env::AWS_WEB_IDENTITY_TOKEN_FILE))
}

fn aws_default_region(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    Ok(aws_from_pod(ctx, env::AWS_DEFAULT_REGION))
}

/// Region from the auth config replaces the Pod's AWS_REGION
fn aws_region(ctx: &RuleContext<'_>) -> Result<Option<String>> {
    if !ctx.config.uses_aws_auth() {
        return Ok(None);
    }
    match ctx.config.auth_config_region()? {
        Some(region) => Ok(Some(region.to_string())),
        None => Ok(find_existing_env(ctx.pod, env::AWS_REGION)),
    }
}
