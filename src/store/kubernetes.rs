//! # Kubernetes Secret Store
//!
//! Reads secrets through the Kubernetes API. One GET per lookup, no caching.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret as KubeSecret;
use kube::{Api, Client};
use tracing::debug;

use super::{Secret, SecretStore, SecretStoreError};

/// [`SecretStore`] backed by the cluster API
#[derive(Clone)]
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for KubeSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeSecretStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        let secrets: Api<KubeSecret> = Api::namespaced(self.client.clone(), namespace);

        match secrets.get(name).await {
            Ok(secret) => {
                debug!("Fetched secret '{}/{}'", namespace, name);
                Ok(Secret::from(secret))
            }
            Err(kube::Error::Api(api_err)) if api_err.code == 404 => {
                Err(SecretStoreError::NotFound {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                })
            }
            Err(e) => Err(SecretStoreError::Backend {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source: Box::new(e),
            }),
        }
    }
}
