//! # Seed Job Validation
//!
//! Entry point for validating the seed jobs of a `Jenkins` resource.
//!
//! Runs the cross-job ID uniqueness check, then folds [`SEED_JOB_CHECKS`]
//! over every job in declaration order. Violations accumulate; a check that
//! aborts ends the whole validation immediately.

use std::collections::HashSet;
use std::sync::Arc;

use kube::ResourceExt;
use tracing::{debug, error, info};

use crate::constants::DEFAULT_NAMESPACE;
use crate::crd::{Jenkins, JenkinsSpec, SeedJob};
use crate::store::SecretStore;

use super::checks::{JobContext, SEED_JOB_CHECKS};
use super::outcome::{Abort, CheckOutcome, ValidationError, ValidationOutcome, Violation};

/// Validates seed jobs against the rules and the injected secret store
#[derive(Clone)]
pub struct SeedJobValidator {
    store: Arc<dyn SecretStore>,
    default_namespace: String,
}

impl std::fmt::Debug for SeedJobValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedJobValidator")
            .field("default_namespace", &self.default_namespace)
            .finish_non_exhaustive()
    }
}

impl SeedJobValidator {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self {
            store,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Namespace used when the resource has none
    #[must_use]
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    /// Validate the seed jobs of a `Jenkins` resource
    ///
    /// Credential secrets are resolved in the resource's namespace.
    ///
    /// # Errors
    ///
    /// Only for infrastructure failures (secret store errors other than
    /// not-found). Invalid content yields `Ok` with a `false` verdict.
    pub async fn validate(&self, jenkins: &Jenkins) -> Result<ValidationOutcome, ValidationError> {
        let namespace = jenkins
            .namespace()
            .unwrap_or_else(|| self.default_namespace.clone());

        info!(
            "Validating {} seed job(s) of Jenkins '{}/{}'",
            jenkins.spec.seed_jobs.len(),
            namespace,
            jenkins.name_any()
        );

        self.validate_spec(&namespace, &jenkins.spec).await
    }

    /// Validate a Jenkins spec whose secrets live in `namespace`
    ///
    /// # Errors
    ///
    /// See [`SeedJobValidator::validate`].
    pub async fn validate_spec(
        &self,
        namespace: &str,
        spec: &JenkinsSpec,
    ) -> Result<ValidationOutcome, ValidationError> {
        let mut outcome = ValidationOutcome::default();

        if let Some(duplicate) = check_unique_ids(&spec.seed_jobs) {
            outcome.record(duplicate);
        }

        for job in &spec.seed_jobs {
            let ctx = JobContext {
                namespace,
                spec,
                job,
                store: self.store.as_ref(),
            };

            for check in SEED_JOB_CHECKS {
                match check.run(&ctx).await {
                    CheckOutcome::Continue(violations) => outcome.extend(violations),
                    CheckOutcome::Abort(Abort::Reject(violation)) => {
                        debug!(
                            seed_job = %job.id,
                            check = check.name(),
                            "Validation stopped by blocking precondition"
                        );
                        outcome.record(violation);
                        return Ok(outcome);
                    }
                    CheckOutcome::Abort(Abort::Fail(err)) => {
                        error!(
                            seed_job = %job.id,
                            check = check.name(),
                            "Seed job validation failed: {}",
                            err
                        );
                        return Err(err);
                    }
                }
            }
        }

        if outcome.is_valid() {
            debug!("All {} seed job(s) are valid", spec.seed_jobs.len());
        }

        Ok(outcome)
    }
}

/// First duplicated seed job ID, if any
///
/// Scanning stops at the first duplicate; later duplicates are not reported.
#[must_use]
pub fn check_unique_ids(seed_jobs: &[SeedJob]) -> Option<Violation> {
    let mut seen = HashSet::new();
    seed_jobs
        .iter()
        .find(|&job| !seen.insert(job.id.as_str()))
        .map(|job| Violation::new(&job.id, format!("'{}' seed job ID is not unique", job.id)))
}
