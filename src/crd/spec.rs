//! # Jenkins Spec
//!
//! The `Jenkins` custom resource as far as seed job validation reads it.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::status::JenkinsStatus;

/// Jenkins Custom Resource Definition
///
/// Only the fields consumed by seed job validation are modelled; unknown
/// fields in a manifest are ignored on deserialization.
///
/// # Example
///
/// ```yaml
/// apiVersion: jenkins.io/v1alpha2
/// kind: Jenkins
/// metadata:
///   name: example
///   namespace: ci
/// spec:
///   master:
///     plugins:
///       - name: github
///         version: "1.29.4"
///   seedJobs:
///     - id: jenkins-operator
///       targets: ["cicd/jobs/*.jenkins"]
///       description: "Jenkins Operator repository"
///       repositoryBranch: master
///       repositoryUrl: git@github.com:jenkinsci/kubernetes-operator.git
///       jenkinsCredentialType: basicSSHUserPrivateKey
///       credentialID: k8s-ssh
///       pollSCM: "1 1 * * 7"
///       githubPushTrigger: true
/// ```
#[derive(CustomResource, Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Jenkins",
    group = "jenkins.io",
    version = "v1alpha2",
    namespaced,
    status = "JenkinsStatus",
    printcolumn = r#"{"name":"SeedJobsValid", "type":"string", "jsonPath":".status.conditions[?(@.type==\"SeedJobsValid\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsSpec {
    /// Jenkins master configuration (plugin sets)
    #[serde(default)]
    pub master: JenkinsMaster,
    /// Seed jobs bootstrapping further jobs from source repositories
    #[serde(default)]
    pub seed_jobs: Vec<SeedJob>,
}

/// Jenkins master plugin configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsMaster {
    /// Plugins installed by the operator itself
    #[serde(default)]
    pub base_plugins: Vec<Plugin>,
    /// Plugins requested by the user
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl JenkinsMaster {
    /// Whether a plugin with the given name appears in either plugin set
    #[must_use]
    pub fn has_plugin(&self, name: &str) -> bool {
        self.base_plugins
            .iter()
            .chain(self.plugins.iter())
            .any(|plugin| plugin.name == name)
    }
}

/// Jenkins plugin reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Plugin {
    /// Plugin name, e.g. `github`
    pub name: String,
    /// Plugin version, e.g. `1.29.4`
    #[serde(default)]
    pub version: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Seed job definition
///
/// Every field defaults when absent so that incomplete jobs reach the
/// validator and are reported there instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedJob {
    /// Unique seed job identifier
    #[serde(default)]
    pub id: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Repository holding the job definitions (HTTPS or SSH remote)
    #[serde(default)]
    pub repository_url: String,
    /// Branch checked out by the seed job
    #[serde(default)]
    pub repository_branch: String,
    /// Job DSL target patterns inside the repository
    #[serde(default)]
    pub targets: Vec<String>,
    /// Raw credential type as written in the resource.
    /// Parsed into [`super::JenkinsCredentialType`] during validation.
    #[serde(default)]
    pub jenkins_credential_type: String,
    /// Name of the Kubernetes secret holding the credential
    #[serde(default, rename = "credentialID")]
    pub credential_id: String,
    /// Cron schedule for periodic builds
    #[serde(default)]
    pub build_periodically: String,
    /// Cron schedule for SCM polling
    #[serde(default, rename = "pollSCM")]
    pub poll_scm: String,
    /// Trigger builds on GitHub push events (requires the `github` plugin)
    #[serde(default)]
    pub github_push_trigger: bool,
}
