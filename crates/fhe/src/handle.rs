// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Opaque reference to an encrypted integer held by the substrate. Carries
/// no plaintext information to holders without a decryption grant.
///
/// The all-zero handle is the uninitialized sentinel: it marks an
/// accumulator that has never been written. It is distinct from an
/// encrypted zero produced by homomorphic addition and must not be
/// decrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CiphertextHandle(pub [u8; 32]);

impl CiphertextHandle {
    pub const UNSET: CiphertextHandle = CiphertextHandle([0u8; 32]);

    pub fn is_unset(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl Display for CiphertextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A ciphertext as submitted by a client, before the bundled input proof has
/// been checked. Conversion into a [`CiphertextHandle`] happens only through
/// [`crate::FheBackend::verify_input_batch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExternalCiphertext(pub [u8; 32]);

impl Display for ExternalCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Opaque attestation that a batch of external ciphertexts was honestly
/// encrypted by a specific submitter for a specific destination. The engine
/// never inspects it; only the substrate can.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProof(Vec<u8>);

impl InputProof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_sentinel_is_the_zero_hash() {
        assert!(CiphertextHandle::UNSET.is_unset());
        assert!(!CiphertextHandle([1; 32]).is_unset());
        assert_eq!(
            CiphertextHandle::UNSET.to_string(),
            format!("0x{}", "00".repeat(32))
        );
    }
}
