//! # Jenkins Credential Types
//!
//! The closed set of credential kinds a seed job may declare.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Credential kind used by a seed job to reach its repository
///
/// The resource stores this as a string; anything outside this set is
/// rejected by validation before rules that match on the kind run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JenkinsCredentialType {
    /// No credential (`""`), public HTTPS repositories
    None,
    /// SSH username and private key (`basicSSHUserPrivateKey`)
    BasicSshUserPrivateKey,
    /// Username and password (`usernamePassword`)
    UsernamePassword,
}

/// Raised when the resource names a credential type outside the allowed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown credential type '{0}'")]
pub struct UnknownCredentialType(pub String);

impl JenkinsCredentialType {
    /// Every allowed credential type
    pub const ALL: [Self; 3] = [
        Self::None,
        Self::BasicSshUserPrivateKey,
        Self::UsernamePassword,
    ];

    /// The value as written in the `Jenkins` resource
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            JenkinsCredentialType::None => "",
            JenkinsCredentialType::BasicSshUserPrivateKey => "basicSSHUserPrivateKey",
            JenkinsCredentialType::UsernamePassword => "usernamePassword",
        }
    }

    /// Whether the credential is backed by a Kubernetes secret named by `credentialID`
    #[must_use]
    pub fn requires_secret(&self) -> bool {
        match self {
            JenkinsCredentialType::None => false,
            JenkinsCredentialType::BasicSshUserPrivateKey
            | JenkinsCredentialType::UsernamePassword => true,
        }
    }
}

impl FromStr for JenkinsCredentialType {
    type Err = UnknownCredentialType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownCredentialType(s.to_string()))
    }
}

impl fmt::Display for JenkinsCredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JenkinsCredentialType::None => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}
