//! # Validation
//!
//! Validates the seed jobs of a `Jenkins` resource.
//!
//! - `seed_jobs.rs` - [`SeedJobValidator`], cross-job checks and the fold
//! - `checks.rs` - Ordered per-job checks
//! - `secrets.rs` - Credential secret shape checks
//! - `private_key.rs` - PEM / PKCS#1 RSA private key checks
//! - `schedule.rs` - Cron grammar
//! - `outcome.rs` - Violations, verdicts and errors

mod checks;
mod outcome;
mod private_key;
mod schedule;
mod secrets;
mod seed_jobs;

pub use checks::{SeedJobCheck, SEED_JOB_CHECKS};
pub use outcome::{Abort, CheckOutcome, ValidationError, ValidationOutcome, Violation};
pub use private_key::{validate_private_key, PrivateKeyError};
pub use schedule::{validate_schedule, ScheduleError};
pub use secrets::{validate_basic_ssh_secret, validate_username_password_secret};
pub use seed_jobs::{check_unique_ids, SeedJobValidator};
