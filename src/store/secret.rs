//! # Secret
//!
//! Owned copy of a secret's data. Values are wiped when the copy is dropped.

use std::collections::BTreeMap;
use std::fmt;

use zeroize::Zeroize;

/// Named map of byte blobs
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret {
    /// Secret name (the seed job's `credentialID`)
    pub name: String,
    /// Secret data entries
    pub data: BTreeMap<String, Vec<u8>>,
}

impl Secret {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    /// Add or replace a data entry
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Raw value of a data entry
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }
}

impl From<k8s_openapi::api::core::v1::Secret> for Secret {
    fn from(secret: k8s_openapi::api::core::v1::Secret) -> Self {
        let mut data: BTreeMap<String, Vec<u8>> = secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, value.0))
            .collect();

        // stringData is write-only on the API server but present in manifests;
        // like the API server, it wins over data on key collisions
        if let Some(string_data) = secret.string_data {
            for (key, value) in string_data {
                data.insert(key, value.into_bytes());
            }
        }

        Self {
            name: secret.metadata.name.unwrap_or_default(),
            data,
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("keys", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        for value in self.data.values_mut() {
            value.zeroize();
        }
    }
}
