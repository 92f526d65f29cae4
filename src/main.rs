//! # seedjobctl
//!
//! Command-line front end for the seed job validator.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a manifest, resolving credential secrets in the cluster
//! seedjobctl validate --file jenkins.yaml
//!
//! # Validate offline against secret manifests
//! seedjobctl validate --file jenkins.yaml --secrets secrets.yaml
//!
//! # Validate a Jenkins resource already applied to the cluster
//! seedjobctl check example --namespace ci
//! ```
//!
//! Exits with status 1 when the seed jobs are invalid.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kube::{Api, Client};
use tracing::debug;

use seedjob_validator::config::ValidatorConfig;
use seedjob_validator::crd::Jenkins;
use seedjob_validator::observability::init_tracing;
use seedjob_validator::store::{InMemorySecretStore, KubeSecretStore, SecretStore};
use seedjob_validator::validation::{SeedJobValidator, ValidationOutcome};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Jenkins seed job validator
#[derive(Parser)]
#[command(name = "seedjobctl", version = VERSION)]
#[command(
    about = "Validate the seed jobs of a Jenkins resource",
    long_about = None,
    after_help = "\
Examples:
  seedjobctl validate --file jenkins.yaml
  seedjobctl validate --file jenkins.yaml --secrets secrets.yaml --output json
  seedjobctl check example --namespace ci
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Namespace holding the credential secrets
    /// (defaults to the resource namespace, then POD_NAMESPACE, then "default")
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a Jenkins manifest from a file
    Validate {
        /// Path to the Jenkins manifest (YAML)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Resolve credential secrets from these Secret manifests instead of the cluster
        #[arg(short, long, value_name = "FILE")]
        secrets: Option<PathBuf>,
    },
    /// Validate a Jenkins resource fetched from the cluster
    Check {
        /// Name of the Jenkins resource
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = ValidatorConfig::from_env();
    init_tracing(&config)?;

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate { file, secrets } => {
            let mut jenkins = load_jenkins(&file)?;
            if let Some(namespace) = &cli.namespace {
                jenkins.metadata.namespace = Some(namespace.clone());
            }

            let store: Arc<dyn SecretStore> = match secrets {
                Some(path) => Arc::new(load_secrets(&path, &config.default_namespace)?),
                None => Arc::new(KubeSecretStore::new(kube_client().await?)),
            };

            SeedJobValidator::new(store)
                .with_default_namespace(config.default_namespace.clone())
                .validate(&jenkins)
                .await
                .context("Seed job validation could not complete")?
        }
        Commands::Check { name } => {
            let client = kube_client().await?;
            let namespace = cli
                .namespace
                .clone()
                .unwrap_or_else(|| config.default_namespace.clone());

            let jenkins_api: Api<Jenkins> = Api::namespaced(client.clone(), &namespace);
            let jenkins = jenkins_api
                .get(&name)
                .await
                .with_context(|| format!("Failed to get Jenkins '{namespace}/{name}'"))?;

            SeedJobValidator::new(Arc::new(KubeSecretStore::new(client)))
                .with_default_namespace(namespace)
                .validate(&jenkins)
                .await
                .context("Seed job validation could not complete")?
        }
    };

    print_outcome(&outcome, cli.output)?;

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Kubernetes client from the ambient kubeconfig / in-cluster config
async fn kube_client() -> Result<Client> {
    // rustls 0.23 needs a process-wide provider before the first TLS handshake
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    Client::try_default()
        .await
        .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")
}

fn load_jenkins(path: &Path) -> Result<Jenkins> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse Jenkins manifest {}", path.display()))
}

fn load_secrets(path: &Path, default_namespace: &str) -> Result<InMemorySecretStore> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let store = InMemorySecretStore::from_manifests(&content, default_namespace)
        .with_context(|| format!("Failed to load secrets from {}", path.display()))?;
    debug!("Loaded {} secret(s) from {}", store.len(), path.display());
    Ok(store)
}

fn print_outcome(outcome: &ValidationOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Text => {
            if outcome.is_valid() {
                println!("✅ Seed jobs are valid");
            } else {
                println!("❌ {} violation(s):", outcome.violations().len());
                for violation in outcome.violations() {
                    println!("  - {violation}");
                }
            }
        }
    }
    Ok(())
}
