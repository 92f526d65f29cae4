//! # Configuration
//!
//! Validator settings loaded from environment variables.

mod validator;

pub use validator::ValidatorConfig;
