//! # In-Memory Secret Store
//!
//! Deterministic [`SecretStore`] for tests and offline validation. Can be
//! seeded from `v1/Secret` manifests (multi-document YAML).

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{Secret, SecretStore, SecretStoreError};

/// Errors raised while loading secret manifests
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse secret manifests: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("secret manifest #{index} has no metadata.name")]
    MissingName { index: usize },
}

/// Secrets held in a map keyed by `(namespace, name)`
#[derive(Debug, Clone, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<(String, String), Secret>,
}

impl InMemorySecretStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a secret
    pub fn insert(&mut self, namespace: impl Into<String>, secret: Secret) {
        self.secrets
            .insert((namespace.into(), secret.name.clone()), secret);
    }

    /// Builder form of [`InMemorySecretStore::insert`]
    #[must_use]
    pub fn with_secret(mut self, namespace: impl Into<String>, secret: Secret) -> Self {
        self.insert(namespace, secret);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Load every `kind: Secret` document from a multi-document YAML string
    ///
    /// Documents of other kinds and empty documents are skipped. Secrets
    /// without `metadata.namespace` land in `default_namespace`.
    ///
    /// # Errors
    ///
    /// Returns an error if a document is not valid YAML, does not match the
    /// `v1/Secret` schema, or has no name.
    pub fn from_manifests(yaml: &str, default_namespace: &str) -> Result<Self, ManifestError> {
        let mut store = Self::new();

        for (index, document) in serde_yaml::Deserializer::from_str(yaml).enumerate() {
            let value = serde_yaml::Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }

            let kind = value.get("kind").and_then(serde_yaml::Value::as_str);
            if kind != Some("Secret") {
                debug!("Skipping manifest #{} of kind {:?}", index, kind);
                continue;
            }

            let manifest: k8s_openapi::api::core::v1::Secret = serde_yaml::from_value(value)?;
            let namespace = manifest
                .metadata
                .namespace
                .clone()
                .unwrap_or_else(|| default_namespace.to_string());
            let secret = Secret::from(manifest);
            if secret.name.is_empty() {
                return Err(ManifestError::MissingName { index });
            }

            store.insert(namespace, secret);
        }

        Ok(store)
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        self.secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| SecretStoreError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}
