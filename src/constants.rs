//! # Constants
//!
//! Shared constants used throughout the validator.
//!
//! These values mirror the Jenkins operator's CRD contract and can be
//! overridden via configuration or environment variables where applicable.

/// Secret data key holding the username for both credential kinds
pub const USERNAME_SECRET_KEY: &str = "username";

/// Secret data key holding the PEM encoded SSH private key
pub const PRIVATE_KEY_SECRET_KEY: &str = "privateKey";

/// Secret data key holding the password for username/password credentials
pub const PASSWORD_SECRET_KEY: &str = "password";

/// Plugin required by seed jobs that enable the GitHub push trigger
pub const GITHUB_PLUGIN_NAME: &str = "github";

/// Substring that marks a repository URL as an SSH remote (`git@host:org/repo.git`)
pub const SSH_REPOSITORY_URL_MARKER: &str = "git@";

/// Status condition type written from a validation outcome
pub const SEED_JOBS_VALID_CONDITION: &str = "SeedJobsValid";

/// Namespace used when neither the resource nor the environment provides one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (`text` or `json`)
pub const DEFAULT_LOG_FORMAT: &str = "text";
