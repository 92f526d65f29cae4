//! # Private Key Validation
//!
//! Sanity checks an SSH private key: PEM envelope, PKCS#1 RSA structure,
//! then the key's arithmetic consistency.

use rsa::pkcs1::RsaPrivateKey as Pkcs1PrivateKey;
use rsa::{BigUint, RsaPrivateKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrivateKeyError {
    #[error("failed to decode PEM block: {0}")]
    MalformedPem(pem::PemError),
    #[error("failed to parse PKCS#1 RSA private key: {0}")]
    MalformedKey(rsa::pkcs1::Error),
    #[error("RSA private key is inconsistent: {0}")]
    InvalidKey(rsa::Error),
}

/// Validate a PEM encoded PKCS#1 RSA private key
///
/// The PEM label is not checked; only the first block is considered.
///
/// # Errors
///
/// One [`PrivateKeyError`] variant per failing stage.
pub fn validate_private_key(private_key: &str) -> Result<(), PrivateKeyError> {
    let block = pem::parse(private_key).map_err(PrivateKeyError::MalformedPem)?;

    let der = Pkcs1PrivateKey::try_from(block.contents()).map_err(PrivateKeyError::MalformedKey)?;

    // from_components checks that the primes multiply to the modulus and that
    // the exponents agree
    RsaPrivateKey::from_components(
        BigUint::from_bytes_be(der.modulus.as_bytes()),
        BigUint::from_bytes_be(der.public_exponent.as_bytes()),
        BigUint::from_bytes_be(der.private_exponent.as_bytes()),
        vec![
            BigUint::from_bytes_be(der.prime1.as_bytes()),
            BigUint::from_bytes_be(der.prime2.as_bytes()),
        ],
    )
    .map_err(PrivateKeyError::InvalidKey)?;

    Ok(())
}
