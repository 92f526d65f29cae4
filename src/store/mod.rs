//! # Secret Store
//!
//! Narrow capability used by validation to read credential secrets.
//!
//! - `secret.rs` - Secret data as seen by the validator
//! - `kubernetes.rs` - Store backed by the Kubernetes API
//! - `memory.rs` - In-memory store for tests and offline validation

mod kubernetes;
mod memory;
mod secret;

use async_trait::async_trait;
use thiserror::Error;

pub use kubernetes::KubeSecretStore;
pub use memory::{InMemorySecretStore, ManifestError};
pub use secret::Secret;

/// Errors returned by a [`SecretStore`]
///
/// Not-found is kept apart from every other failure: validation treats the
/// first as a rejected Jenkins spec and the second as an infrastructure error.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("secret '{namespace}/{name}' not found")]
    NotFound { namespace: String, name: String },
    #[error("failed to read secret '{namespace}/{name}'")]
    Backend {
        namespace: String,
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl SecretStoreError {
    /// Whether the secret simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SecretStoreError::NotFound { .. })
    }
}

/// Read-only access to secrets keyed by namespace and name
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch a single secret
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::NotFound`] when no such secret exists,
    /// [`SecretStoreError::Backend`] for any other failure.
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError>;
}
