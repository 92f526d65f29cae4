//! # Jenkins Status
//!
//! Status types used to surface the seed job verdict on the resource.

use serde::{Deserialize, Serialize};

/// Status of the Jenkins resource (the subset written by this crate)
#[derive(Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Kubernetes-style status condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Condition type, e.g. `SeedJobsValid`
    pub r#type: String,
    /// `True`, `False` or `Unknown`
    pub status: String,
    /// Last time the condition transitioned (RFC3339)
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Machine-readable reason
    #[serde(default)]
    pub reason: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}
