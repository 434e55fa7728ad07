//! Fixed-width proposal labels.
//!
//! A proposal name is an opaque label of at most 32 bytes, stored
//! zero-padded on the right. The ledger never interprets it; it is only
//! stored and handed back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypesError;

/// A proposal label, zero-padded to 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalName([u8; 32]);

impl ProposalName {
    /// Maximum label length in bytes.
    pub const MAX_LEN: usize = 32;

    /// Build a name from raw bytes, padding with zeros.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, TypesError> {
        if raw.len() > Self::MAX_LEN {
            return Err(TypesError::NameTooLong {
                len: raw.len(),
                max: Self::MAX_LEN,
            });
        }
        let mut bytes = [0u8; 32];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self(bytes))
    }

    /// Build a name from a UTF-8 label.
    pub fn new(label: &str) -> Result<Self, TypesError> {
        Self::from_bytes(label.as_bytes())
    }

    /// The full zero-padded 32-byte form.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The label with trailing zero padding removed.
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }

    /// Lossy UTF-8 rendering of the trimmed label.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.trimmed()).into_owned()
    }
}

impl fmt::Display for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalName({:?})", self.to_string_lossy())
    }
}

impl TryFrom<&str> for ProposalName {
    type Error = TypesError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}
