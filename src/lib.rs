//! Jenkins Seed Job Validator Library
//!
//! Decides whether the seed jobs declared in a `Jenkins` resource are safe
//! and complete to apply: required fields, credential type and secret shape,
//! SSH private keys, cron schedules and plugin preconditions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use seedjob_validator::prelude::*;
//!
//! # async fn run(jenkins: Jenkins) -> Result<(), ValidationError> {
//! let store = InMemorySecretStore::new();
//! let validator = SeedJobValidator::new(Arc::new(store));
//! let outcome = validator.validate(&jenkins).await?;
//! if !outcome.is_valid() {
//!     for violation in outcome.violations() {
//!         eprintln!("{violation}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod observability;
pub mod prelude;
pub mod store;
pub mod validation;
