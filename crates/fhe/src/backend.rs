// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{CiphertextHandle, ExternalCiphertext, InputProof};
use tacit_events::Identity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FheError {
    #[error("input proof rejected: {reason}")]
    ProofRejected { reason: String },

    #[error("unknown ciphertext handle {handle}")]
    UnknownHandle { handle: CiphertextHandle },

    #[error("no decryption grant for {identity} on {handle}")]
    NoGrant {
        identity: Identity,
        handle: CiphertextHandle,
    },

    #[error("refusing to decrypt the uninitialized sentinel handle")]
    SentinelDecrypt,
}

/// Minimal capability interface the engine requires from an encrypted
/// integer substrate.
///
/// The engine never sees plaintext through this trait. Implementations own
/// ciphertext storage, proof checking and the decryption ACL; the engine
/// only moves opaque handles around.
pub trait FheBackend {
    /// Check the attestation bundled with a batch of external ciphertexts:
    /// every entry must have been honestly encrypted by `submitter` for
    /// `destination`. All-or-nothing; on success returns one internal
    /// handle per input, in input order.
    fn verify_input_batch(
        &mut self,
        inputs: &[ExternalCiphertext],
        proof: &InputProof,
        submitter: &Identity,
        destination: &Identity,
    ) -> Result<Vec<CiphertextHandle>, FheError>;

    /// A trivial encryption of zero, used to initialize an accumulator on
    /// its first write.
    fn trivial_zero(&mut self) -> Result<CiphertextHandle, FheError>;

    /// Homomorphic addition. The returned handle's plaintext equals the sum
    /// of the inputs' plaintexts; commutative and associative.
    fn add(
        &mut self,
        lhs: CiphertextHandle,
        rhs: CiphertextHandle,
    ) -> Result<CiphertextHandle, FheError>;

    /// Authorize `identity` to decrypt `handle` through an external
    /// decryption process. Granting is idempotent.
    fn grant_decrypt(
        &mut self,
        identity: &Identity,
        handle: CiphertextHandle,
    ) -> Result<(), FheError>;
}
