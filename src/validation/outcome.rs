//! # Validation Outcome
//!
//! Violations, per-check outcomes and the final verdict.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::constants::SEED_JOBS_VALID_CONDITION;
use crate::crd::Condition;
use crate::store::SecretStoreError;

/// A single rule violation, tagged with the offending seed job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// ID of the seed job (may be empty when the ID itself is missing)
    pub seed_job: String,
    pub message: String,
}

impl Violation {
    pub fn new(seed_job: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            seed_job: seed_job.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seed job '{}': {}", self.seed_job, self.message)
    }
}

/// Infrastructure failure during validation
///
/// Distinct from a `false` verdict: the Jenkins spec was not judged, the
/// caller should retry.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to fetch credential secret for seed job '{seed_job}'")]
    SecretStore {
        seed_job: String,
        #[source]
        source: SecretStoreError,
    },
}

/// Why a check stopped the whole validation
#[derive(Debug)]
pub enum Abort {
    /// Blocking precondition: the Jenkins spec is rejected, nothing further is evaluated
    Reject(Violation),
    /// Infrastructure failure
    Fail(ValidationError),
}

/// Result of running one check against one seed job
#[derive(Debug)]
pub enum CheckOutcome {
    /// Keep going, recording these violations (possibly none)
    Continue(Vec<Violation>),
    /// Stop the fold
    Abort(Abort),
}

impl CheckOutcome {
    /// Continue with no violations
    #[must_use]
    pub fn pass() -> Self {
        CheckOutcome::Continue(Vec::new())
    }

    /// Continue with a single violation
    pub fn violation(seed_job: impl Into<String>, message: impl Into<String>) -> Self {
        CheckOutcome::Continue(vec![Violation::new(seed_job, message)])
    }

    /// Abort with a rejected verdict
    pub fn reject(seed_job: impl Into<String>, message: impl Into<String>) -> Self {
        CheckOutcome::Abort(Abort::Reject(Violation::new(seed_job, message)))
    }
}

/// Verdict for one Jenkins spec plus every violation found
///
/// Always holds `valid == violations.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    valid: bool,
    violations: Vec<Violation>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Messages of the violations recorded against one seed job
    #[must_use]
    pub fn messages_for(&self, seed_job: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.seed_job == seed_job)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// Record a violation and emit it as a warning
    pub fn record(&mut self, violation: Violation) {
        warn!(seed_job = %violation.seed_job, "{}", violation.message);
        self.valid = false;
        self.violations.push(violation);
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        for violation in violations {
            self.record(violation);
        }
    }

    /// Status condition reflecting this outcome
    #[must_use]
    pub fn condition(&self) -> Condition {
        let (status, reason, message) = if self.valid {
            ("True", "Valid", "All seed jobs are valid".to_string())
        } else {
            let message = self
                .violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            ("False", "InvalidSeedJobs", message)
        };

        Condition {
            r#type: SEED_JOBS_VALID_CONDITION.to_string(),
            status: status.to_string(),
            last_transition_time: Some(chrono::Utc::now().to_rfc3339()),
            reason: Some(reason.to_string()),
            message: Some(message),
        }
    }
}
