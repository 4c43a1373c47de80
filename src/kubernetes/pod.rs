// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to the environment already declared on a Pod's containers

use crate::env::resolve_container_env;
use crate::error::Result;
use crate::types::{AgentConfig, EnvAssignment};
use k8s_openapi::api::core::v1::{EnvVar, Pod};
use kube::ResourceExt;
use tracing::{debug, instrument};

/// Lookup of environment variables declared on a Pod before injection
pub trait ExistingEnv {
    /// Names of the Pod's containers, in declaration order
    fn container_names(&self) -> Vec<&str>;

    /// Literal value of `name` in the given container's environment
    fn lookup_existing_env(&self, container: &str, name: &str) -> Option<String>;
}

/// Find the first container that declares `name` and return its value
pub fn find_existing_env(pod: &dyn ExistingEnv, name: &str) -> Option<String> {
    pod.container_names()
        .into_iter()
        .find_map(|container| pod.lookup_existing_env(container, name))
}

impl ExistingEnv for Pod {
    fn container_names(&self) -> Vec<&str> {
        self.spec
            .as_ref()
            .map(|s| s.containers.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }

    // Entries sourced only through valueFrom have no literal value to copy
    fn lookup_existing_env(&self, container: &str, name: &str) -> Option<String> {
        self.spec
            .as_ref()?
            .containers
            .iter()
            .find(|c| c.name == container)?
            .env
            .as_ref()?
            .iter()
            .find(|e| e.name == name)?
            .value
            .clone()
    }
}

impl<T: ExistingEnv> ExistingEnv for Option<T> {
    fn container_names(&self) -> Vec<&str> {
        self.as_ref()
            .map(|p| p.container_names())
            .unwrap_or_default()
    }

    fn lookup_existing_env(&self, container: &str, name: &str) -> Option<String> {
        self.as_ref()?.lookup_existing_env(container, name)
    }
}

impl<T: ExistingEnv + ?Sized> ExistingEnv for &T {
    fn container_names(&self) -> Vec<&str> {
        (**self).container_names()
    }

    fn lookup_existing_env(&self, container: &str, name: &str) -> Option<String> {
        (**self).lookup_existing_env(container, name)
    }
}

impl From<EnvAssignment> for EnvVar {
    fn from(assignment: EnvAssignment) -> Self {
        EnvVar {
            name: assignment.name,
            value: Some(assignment.value),
            value_from: None,
        }
    }
}

/// Resolve the agent container environment for a Pod as Kubernetes `EnvVar`s
#[instrument(skip(config, pod), fields(pod = %pod.name_any()))]
pub fn pod_container_env(
    config: &AgentConfig,
    pod: &Pod,
    init_container: bool,
) -> Result<Vec<EnvVar>> {
    let envs = resolve_container_env(config, pod, init_container)?;
    debug!("Resolved {} env vars for agent container", envs.len());

    Ok(envs.into_iter().map(EnvVar::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pod_from_yaml, pod_with_env, FakePodEnv};

    #[test]
    fn test_lookup_existing_env_found() {
        let pod = pod_with_env(&[("AWS_ROLE_ARN", "foorole")]);
        assert_eq!(
            pod.lookup_existing_env("foobar", "AWS_ROLE_ARN").as_deref(),
            Some("foorole")
        );
    }

    #[test]
    fn test_lookup_existing_env_wrong_container() {
        let pod = pod_with_env(&[("AWS_ROLE_ARN", "foorole")]);
        assert_eq!(pod.lookup_existing_env("other", "AWS_ROLE_ARN"), None);
    }

    #[test]
    fn test_lookup_existing_env_no_env() {
        let pod = pod_with_env(&[]);
        assert_eq!(pod.lookup_existing_env("foobar", "AWS_ROLE_ARN"), None);
    }

    #[test]
    fn test_lookup_existing_env_no_spec() {
        let pod = Pod::default();
        assert!(pod.container_names().is_empty());
        assert_eq!(pod.lookup_existing_env("foobar", "AWS_ROLE_ARN"), None);
    }

    #[test]
    fn test_lookup_existing_env_value_from_is_absent() {
        let pod = pod_from_yaml(
            r#"
apiVersion: v1
kind: Pod
metadata:
  name: foo
spec:
  containers:
    - name: app
      env:
        - name: AWS_REGION
          valueFrom:
            configMapKeyRef:
              name: aws
              key: region
"#,
        );
        assert_eq!(pod.lookup_existing_env("app", "AWS_REGION"), None);
    }

    #[test]
    fn test_find_existing_env_first_container_wins() {
        let pod = pod_from_yaml(
            r#"
apiVersion: v1
kind: Pod
metadata:
  name: foo
spec:
  containers:
    - name: first
      env:
        - name: AWS_REGION
          value: eu-west-1
    - name: second
      env:
        - name: AWS_REGION
          value: us-east-1
        - name: AWS_ROLE_ARN
          value: second-role
"#,
        );

        assert_eq!(pod.container_names(), vec!["first", "second"]);
        assert_eq!(
            find_existing_env(&pod, "AWS_REGION").as_deref(),
            Some("eu-west-1")
        );
        assert_eq!(
            find_existing_env(&pod, "AWS_ROLE_ARN").as_deref(),
            Some("second-role")
        );
    }

    #[test]
    fn test_option_pod_none() {
        let pod: Option<&Pod> = None;
        assert!(pod.container_names().is_empty());
        assert_eq!(find_existing_env(&pod, "AWS_REGION"), None);
    }

    #[test]
    fn test_fake_env_lookup() {
        let fake = FakePodEnv::new().with("sidecar", "AWS_REGION", "eu-central-1");
        assert_eq!(
            find_existing_env(&fake, "AWS_REGION").as_deref(),
            Some("eu-central-1")
        );
    }

    #[test]
    fn test_env_var_from_assignment() {
        let env = EnvVar::from(EnvAssignment::new("VAULT_ADDR", "http://localhost:8200"));
        assert_eq!(env.name, "VAULT_ADDR");
        assert_eq!(env.value.as_deref(), Some("http://localhost:8200"));
        assert!(env.value_from.is_none());
    }

    #[test]
    fn test_pod_container_env() {
        let pod = pod_with_env(&[("AWS_ROLE_ARN", "foorole")]);
        let config = AgentConfig {
            auth_type: Some("aws".to_string()),
            ..Default::default()
        };

        let envs = pod_container_env(&config, &pod, false).unwrap();
        let names: Vec<&str> = envs.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["VAULT_CONFIG", "AWS_ROLE_ARN"]);
        assert_eq!(envs[1].value.as_deref(), Some("foorole"));
    }
}
