// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for building Pods and fake Pod environments.

use crate::kubernetes::ExistingEnv;
use k8s_openapi::api::core::v1::Pod;
use std::collections::BTreeMap;

/// An in-memory Pod environment keyed by container, then variable name.
///
/// Containers are reported in name order.
#[derive(Clone, Debug, Default)]
pub struct FakePodEnv {
    containers: BTreeMap<String, BTreeMap<String, String>>,
}

impl FakePodEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to a container, creating the container if needed
    pub fn with(mut self, container: &str, name: &str, value: &str) -> Self {
        self.containers
            .entry(container.to_string())
            .or_default()
            .insert(name.to_string(), value.to_string());
        self
    }
}

impl ExistingEnv for FakePodEnv {
    fn container_names(&self) -> Vec<&str> {
        self.containers.keys().map(String::as_str).collect()
    }

    fn lookup_existing_env(&self, container: &str, name: &str) -> Option<String> {
        self.containers.get(container)?.get(name).cloned()
    }
}

/// Create a Pod with a single container named "foobar" carrying the given env
pub fn pod_with_env(env: &[(&str, &str)]) -> Pod {
    let env: Vec<serde_json::Value> = env
        .iter()
        .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
        .collect();

    serde_json::from_value(serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": "foo"
        },
        "spec": {
            "containers": [
                {
                    "name": "foobar",
                    "env": env
                }
            ]
        }
    }))
    .unwrap()
}

/// Parse a Pod manifest
pub fn pod_from_yaml(manifest: &str) -> Pod {
    serde_yaml::from_str(manifest).unwrap()
}
