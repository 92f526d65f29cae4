//! # Credential Secret Validation
//!
//! Shape checks for the secrets behind seed job credentials. Each check
//! returns the problems it found; an empty list means the secret is usable.

use crate::constants::{PASSWORD_SECRET_KEY, PRIVATE_KEY_SECRET_KEY, USERNAME_SECRET_KEY};
use crate::store::Secret;

use super::private_key::validate_private_key;

/// Validate a `basicSSHUserPrivateKey` secret
///
/// Requires non-empty `username` and `privateKey`. The private key is only
/// parsed when present and non-empty.
#[must_use]
pub fn validate_basic_ssh_secret(secret: &Secret) -> Vec<String> {
    let mut problems = Vec::new();

    require_entry(secret, USERNAME_SECRET_KEY, &mut problems);

    let Some(private_key) = require_entry(secret, PRIVATE_KEY_SECRET_KEY, &mut problems) else {
        return problems;
    };

    if let Err(e) = validate_private_key(&String::from_utf8_lossy(private_key)) {
        problems.push(format!(
            "private key '{}' invalid in secret '{}': {}",
            PRIVATE_KEY_SECRET_KEY, secret.name, e
        ));
    }

    problems
}

/// Validate a `usernamePassword` secret
#[must_use]
pub fn validate_username_password_secret(secret: &Secret) -> Vec<String> {
    let mut problems = Vec::new();

    require_entry(secret, USERNAME_SECRET_KEY, &mut problems);
    require_entry(secret, PASSWORD_SECRET_KEY, &mut problems);

    problems
}

/// Value of a required, non-empty entry; records a problem otherwise
fn require_entry<'a>(secret: &'a Secret, key: &str, problems: &mut Vec<String>) -> Option<&'a [u8]> {
    match secret.get(key) {
        None => {
            problems.push(format!(
                "required data '{}' not found in secret '{}'",
                key, secret.name
            ));
            None
        }
        Some([]) => {
            problems.push(format!(
                "required data '{}' is empty in secret '{}'",
                key, secret.name
            ));
            None
        }
        Some(value) => Some(value),
    }
}
