//! # CRD Generator
//!
//! Prints the `Jenkins` CustomResourceDefinition as modelled by this crate.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin crdgen > config/crd/jenkins.yaml
//! ```

use kube::core::CustomResourceExt;
use seedjob_validator::crd::Jenkins;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&Jenkins::crd())?);
    Ok(())
}
