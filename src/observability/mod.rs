//! # Observability
//!
//! - `logging`: tracing subscriber setup for the binaries

pub mod logging;

pub use logging::init_tracing;
