//! # Seed Job Checks
//!
//! The per-job rules, as an explicit ordered list. The validator folds
//! [`SEED_JOB_CHECKS`] left to right for every job; each check either
//! continues with zero or more violations or aborts the whole validation.

use tracing::debug;

use crate::constants::{GITHUB_PLUGIN_NAME, SSH_REPOSITORY_URL_MARKER};
use crate::crd::{JenkinsCredentialType, JenkinsSpec, SeedJob};
use crate::store::{SecretStore, SecretStoreError};

use super::outcome::{Abort, CheckOutcome, ValidationError, Violation};
use super::schedule::validate_schedule;
use super::secrets::{validate_basic_ssh_secret, validate_username_password_secret};

/// One per-job rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedJobCheck {
    /// `id`, `repositoryBranch`, `repositoryUrl` and `targets` are set
    RequiredFields,
    /// Credential type is in the allowed set (aborts otherwise)
    CredentialType,
    /// Secret-backed credentials name their secret
    CredentialId,
    /// SSH remotes need a credential
    SshRepositoryCredential,
    /// Credential secret exists and has the right shape
    CredentialSecret,
    /// `buildPeriodically` is a cron expression
    BuildPeriodically,
    /// `pollSCM` is a cron expression
    PollScm,
    /// Push trigger has the `github` plugin available
    GitHubPushTrigger,
}

/// Evaluation order. [`SeedJobCheck::CredentialType`] must precede every
/// check that matches on the credential type.
pub const SEED_JOB_CHECKS: [SeedJobCheck; 8] = [
    SeedJobCheck::RequiredFields,
    SeedJobCheck::CredentialType,
    SeedJobCheck::CredentialId,
    SeedJobCheck::SshRepositoryCredential,
    SeedJobCheck::CredentialSecret,
    SeedJobCheck::BuildPeriodically,
    SeedJobCheck::PollScm,
    SeedJobCheck::GitHubPushTrigger,
];

/// Everything a check may look at
pub(crate) struct JobContext<'a> {
    pub namespace: &'a str,
    pub spec: &'a JenkinsSpec,
    pub job: &'a SeedJob,
    pub store: &'a dyn SecretStore,
}

impl JobContext<'_> {
    /// Parsed credential type, `None` when outside the allowed set
    fn credential_type(&self) -> Option<JenkinsCredentialType> {
        self.job.jenkins_credential_type.parse().ok()
    }
}

impl SeedJobCheck {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SeedJobCheck::RequiredFields => "required-fields",
            SeedJobCheck::CredentialType => "credential-type",
            SeedJobCheck::CredentialId => "credential-id",
            SeedJobCheck::SshRepositoryCredential => "ssh-repository-credential",
            SeedJobCheck::CredentialSecret => "credential-secret",
            SeedJobCheck::BuildPeriodically => "build-periodically",
            SeedJobCheck::PollScm => "poll-scm",
            SeedJobCheck::GitHubPushTrigger => "github-push-trigger",
        }
    }

    pub(crate) async fn run(self, ctx: &JobContext<'_>) -> CheckOutcome {
        let job = ctx.job;
        match self {
            SeedJobCheck::RequiredFields => required_fields(job),
            SeedJobCheck::CredentialType => match ctx.credential_type() {
                Some(_) => CheckOutcome::pass(),
                None => CheckOutcome::reject(
                    &job.id,
                    format!(
                        "unknown credential type '{}'",
                        job.jenkins_credential_type
                    ),
                ),
            },
            SeedJobCheck::CredentialId => {
                // Unknown credential types never get here: CredentialType aborts first
                let Some(credential) = ctx.credential_type() else {
                    return CheckOutcome::pass();
                };
                if credential.requires_secret() && job.credential_id.is_empty() {
                    CheckOutcome::violation(&job.id, "credential ID can't be empty")
                } else {
                    CheckOutcome::pass()
                }
            }
            SeedJobCheck::SshRepositoryCredential => {
                let Some(credential) = ctx.credential_type() else {
                    return CheckOutcome::pass();
                };
                let needs_credential = match credential {
                    JenkinsCredentialType::None => {
                        job.repository_url.contains(SSH_REPOSITORY_URL_MARKER)
                    }
                    JenkinsCredentialType::BasicSshUserPrivateKey
                    | JenkinsCredentialType::UsernamePassword => false,
                };
                if needs_credential {
                    CheckOutcome::violation(
                        &job.id,
                        "Jenkins credential must be set while using ssh repository url",
                    )
                } else {
                    CheckOutcome::pass()
                }
            }
            SeedJobCheck::CredentialSecret => match ctx.credential_type() {
                Some(credential) => credential_secret(ctx, credential).await,
                None => CheckOutcome::pass(),
            },
            SeedJobCheck::BuildPeriodically => {
                schedule(job, &job.build_periodically, "buildPeriodically")
            }
            SeedJobCheck::PollScm => schedule(job, &job.poll_scm, "pollSCM"),
            SeedJobCheck::GitHubPushTrigger => {
                if job.github_push_trigger && !ctx.spec.master.has_plugin(GITHUB_PLUGIN_NAME) {
                    CheckOutcome::violation(
                        &job.id,
                        format!(
                            "githubPushTrigger is set. This function requires `{GITHUB_PLUGIN_NAME}` plugin installed in .spec.master.plugins because seed jobs Push Trigger function needs it"
                        ),
                    )
                } else {
                    CheckOutcome::pass()
                }
            }
        }
    }
}

/// One violation per missing field
fn required_fields(job: &SeedJob) -> CheckOutcome {
    let missing = [
        (job.id.is_empty(), "id can't be empty"),
        (job.repository_branch.is_empty(), "repository branch can't be empty"),
        (job.repository_url.is_empty(), "repository URL can't be empty"),
        (job.targets.is_empty(), "targets can't be empty"),
    ];

    CheckOutcome::Continue(
        missing
            .into_iter()
            .filter(|(is_missing, _)| *is_missing)
            .map(|(_, message)| Violation::new(&job.id, message))
            .collect(),
    )
}

/// Fetch the credential secret and check its shape
async fn credential_secret(ctx: &JobContext<'_>, credential: JenkinsCredentialType) -> CheckOutcome {
    let job = ctx.job;

    // An empty credential ID was already reported by CredentialId; there is
    // nothing to look up. Querying the API server with an empty name would
    // surface as a backend error instead of a violation.
    if !credential.requires_secret() || job.credential_id.is_empty() {
        return CheckOutcome::pass();
    }

    let secret = match ctx.store.get(ctx.namespace, &job.credential_id).await {
        Ok(secret) => secret,
        Err(SecretStoreError::NotFound { .. }) => {
            return CheckOutcome::reject(
                &job.id,
                format!(
                    "required secret '{}' with Jenkins credential not found",
                    job.credential_id
                ),
            );
        }
        Err(e) => {
            return CheckOutcome::Abort(Abort::Fail(ValidationError::SecretStore {
                seed_job: job.id.clone(),
                source: e,
            }));
        }
    };

    debug!(
        seed_job = %job.id,
        "Checking {} secret '{}/{}'",
        credential, ctx.namespace, secret.name
    );

    let problems = match credential {
        JenkinsCredentialType::BasicSshUserPrivateKey => validate_basic_ssh_secret(&secret),
        JenkinsCredentialType::UsernamePassword => validate_username_password_secret(&secret),
        JenkinsCredentialType::None => Vec::new(),
    };

    CheckOutcome::Continue(
        problems
            .into_iter()
            .map(|message| Violation::new(&job.id, message))
            .collect(),
    )
}

/// Optional cron field; empty means unset
fn schedule(job: &SeedJob, expression: &str, field: &str) -> CheckOutcome {
    if expression.is_empty() {
        return CheckOutcome::pass();
    }

    match validate_schedule(expression) {
        Ok(()) => CheckOutcome::pass(),
        Err(e) => CheckOutcome::violation(
            &job.id,
            format!(
                "`{}` schedule '{}' is invalid cron spec: {}",
                field, expression, e.reason
            ),
        ),
    }
}
