//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use seedjob_validator::prelude::*;
//! ```

// CRD types - most commonly used
pub use crate::crd::*;

// Secret store capability and implementations
pub use crate::store::{
    InMemorySecretStore, KubeSecretStore, Secret, SecretStore, SecretStoreError,
};

// Validation entry point and results
pub use crate::validation::{
    SeedJobValidator, ValidationError, ValidationOutcome, Violation,
};

pub use crate::config::ValidatorConfig;
