//! Common test utilities for seed job validation tests
//!
//! Builders for specs and secrets, the PEM fixtures, and secret stores that
//! fail or count lookups.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use seedjob_validator::crd::{JenkinsMaster, JenkinsSpec, Plugin, SeedJob};
use seedjob_validator::store::{InMemorySecretStore, Secret, SecretStore, SecretStoreError};

pub const NAMESPACE: &str = "ci";
pub const PKCS1_KEY: &str = include_str!("../fixtures/rsa_pkcs1.pem");
pub const PKCS8_KEY: &str = include_str!("../fixtures/rsa_pkcs8.pem");

static TRACING_INIT: Once = Once::new();

/// Route validator warnings to the test output
///
/// Uses a `Once` so every test can call it.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("seedjob_validator=debug")
            .with_test_writer()
            .try_init();
    });
}

/// A job that passes every rule with no credential
pub fn public_job(id: &str) -> SeedJob {
    SeedJob {
        id: id.to_string(),
        description: format!("{id} seed job"),
        repository_url: "https://github.com/jenkinsci/kubernetes-operator.git".to_string(),
        repository_branch: "master".to_string(),
        targets: vec!["cicd/jobs/*.jenkins".to_string()],
        ..Default::default()
    }
}

/// A job using SSH credentials stored in `credential_id`
pub fn ssh_job(id: &str, credential_id: &str) -> SeedJob {
    SeedJob {
        repository_url: "git@github.com:jenkinsci/kubernetes-operator.git".to_string(),
        jenkins_credential_type: "basicSSHUserPrivateKey".to_string(),
        credential_id: credential_id.to_string(),
        ..public_job(id)
    }
}

/// A job using username/password credentials stored in `credential_id`
pub fn basic_auth_job(id: &str, credential_id: &str) -> SeedJob {
    SeedJob {
        jenkins_credential_type: "usernamePassword".to_string(),
        credential_id: credential_id.to_string(),
        ..public_job(id)
    }
}

pub fn spec(seed_jobs: Vec<SeedJob>) -> JenkinsSpec {
    JenkinsSpec {
        master: JenkinsMaster::default(),
        seed_jobs,
    }
}

pub fn spec_with_plugins(
    seed_jobs: Vec<SeedJob>,
    base_plugins: Vec<Plugin>,
    plugins: Vec<Plugin>,
) -> JenkinsSpec {
    JenkinsSpec {
        master: JenkinsMaster {
            base_plugins,
            plugins,
        },
        seed_jobs,
    }
}

pub fn ssh_secret(name: &str, private_key: &str) -> Secret {
    Secret::new(name)
        .with_entry("username", "jenkins")
        .with_entry("privateKey", private_key)
}

pub fn store_with(secrets: Vec<Secret>) -> InMemorySecretStore {
    secrets
        .into_iter()
        .fold(InMemorySecretStore::new(), |store, secret| {
            store.with_secret(NAMESPACE, secret)
        })
}

/// Store whose every lookup fails with a backend error
#[derive(Debug, Default)]
pub struct FailingSecretStore;

#[async_trait]
impl SecretStore for FailingSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        Err(SecretStoreError::Backend {
            namespace: namespace.to_string(),
            name: name.to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        })
    }
}

/// Store that counts lookups before delegating
#[derive(Debug)]
pub struct CountingSecretStore {
    inner: InMemorySecretStore,
    calls: Arc<AtomicUsize>,
}

impl CountingSecretStore {
    pub fn new(inner: InMemorySecretStore) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl SecretStore for CountingSecretStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<Secret, SecretStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(namespace, name).await
    }
}
