// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes object model adapters for Pod environment lookup and container env output.

pub mod pod;

pub use pod::{find_existing_env, pod_container_env, ExistingEnv};
