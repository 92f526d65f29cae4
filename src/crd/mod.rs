//! # Custom Resource Definitions
//!
//! CRD types for the Jenkins operator resource validated by this crate.
//!
//! ## Module Structure
//!
//! - `spec.rs` - `Jenkins` resource, master plugin lists and seed jobs
//! - `credential.rs` - Closed set of Jenkins credential types
//! - `status.rs` - Status types for surfacing the validation verdict

mod credential;
mod spec;
mod status;

// Re-export all public types
pub use credential::{JenkinsCredentialType, UnknownCredentialType};
pub use spec::{Jenkins, JenkinsMaster, JenkinsSpec, Plugin, SeedJob};
pub use status::{Condition, JenkinsStatus};
