// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Deterministic plaintext-tracking substrate for local runs and tests.
//!
//! Plays both sides of the boundary: the client-side input builder
//! ([`MockFhe::encrypt_input`]) and user decryption ([`MockFhe::decrypt`]),
//! plus the engine-facing [`FheBackend`] capability. Plaintexts live only
//! inside this module; engine code paths see opaque handles.

use crate::{CiphertextHandle, ExternalCiphertext, FheBackend, FheError, InputProof};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use tacit_events::Identity;
use tracing::debug;

/// What the opaque proof blob actually carries: the (submitter, destination)
/// binding and the exact batch it covers.
#[derive(Serialize, Deserialize)]
struct ProofPayload {
    submitter: Identity,
    destination: Identity,
    inputs: Vec<ExternalCiphertext>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MockFhe {
    seed: u64,
    counter: u64,
    values: BTreeMap<CiphertextHandle, u64>,
    pending: BTreeMap<ExternalCiphertext, u64>,
    grants: BTreeSet<(Identity, CiphertextHandle)>,
}

impl Default for MockFhe {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl MockFhe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            counter: 0,
            values: BTreeMap::new(),
            pending: BTreeMap::new(),
            grants: BTreeSet::new(),
        }
    }

    /// Derive the next handle. Handles must never collide with the all-zero
    /// sentinel; a sha256 digest of a strictly increasing counter cannot.
    fn mint(&mut self, tag: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_be_bytes());
        hasher.update(self.counter.to_be_bytes());
        hasher.update(tag);
        self.counter += 1;
        let digest: [u8; 32] = hasher.finalize().into();
        debug_assert_ne!(digest, [0u8; 32]);
        digest
    }

    /// Client-side input builder: encrypt `values` for `destination`,
    /// returning one external ciphertext per value and a single attestation
    /// covering the whole batch.
    pub fn encrypt_input(
        &mut self,
        submitter: &Identity,
        destination: &Identity,
        values: &[u64],
    ) -> (Vec<ExternalCiphertext>, InputProof) {
        let inputs: Vec<ExternalCiphertext> = values
            .iter()
            .map(|&value| {
                let handle = ExternalCiphertext(self.mint(b"input"));
                self.pending.insert(handle, value);
                handle
            })
            .collect();

        let payload = ProofPayload {
            submitter: *submitter,
            destination: *destination,
            inputs: inputs.clone(),
        };
        let proof = InputProof::new(
            bincode::serialize(&payload).expect("proof payload is plain data"),
        );

        (inputs, proof)
    }

    /// User decryption, gated on a prior [`FheBackend::grant_decrypt`] for
    /// this identity. The uninitialized sentinel is never decryptable.
    pub fn decrypt(
        &self,
        identity: &Identity,
        handle: CiphertextHandle,
    ) -> Result<u64, FheError> {
        if handle.is_unset() {
            return Err(FheError::SentinelDecrypt);
        }
        let value = *self
            .values
            .get(&handle)
            .ok_or(FheError::UnknownHandle { handle })?;
        if !self.grants.contains(&(*identity, handle)) {
            return Err(FheError::NoGrant {
                identity: *identity,
                handle,
            });
        }
        Ok(value)
    }

    fn resolve(&self, handle: CiphertextHandle) -> Result<u64, FheError> {
        self.values
            .get(&handle)
            .copied()
            .ok_or(FheError::UnknownHandle { handle })
    }
}

impl FheBackend for MockFhe {
    fn verify_input_batch(
        &mut self,
        inputs: &[ExternalCiphertext],
        proof: &InputProof,
        submitter: &Identity,
        destination: &Identity,
    ) -> Result<Vec<CiphertextHandle>, FheError> {
        let payload: ProofPayload =
            bincode::deserialize(proof.as_bytes()).map_err(|_| FheError::ProofRejected {
                reason: "malformed attestation".to_string(),
            })?;

        if payload.submitter != *submitter {
            return Err(FheError::ProofRejected {
                reason: "attestation is not bound to this submitter".to_string(),
            });
        }
        if payload.destination != *destination {
            return Err(FheError::ProofRejected {
                reason: "attestation is not bound to this destination".to_string(),
            });
        }
        if payload.inputs != inputs {
            return Err(FheError::ProofRejected {
                reason: "attestation does not cover this batch".to_string(),
            });
        }

        // All-or-nothing: resolve every input before minting anything.
        let values = inputs
            .iter()
            .map(|external| {
                self.pending
                    .get(external)
                    .copied()
                    .ok_or(FheError::ProofRejected {
                        reason: "unknown external ciphertext".to_string(),
                    })
            })
            .collect::<Result<Vec<u64>, FheError>>()?;

        debug!(batch_len = inputs.len(), submitter = %submitter, "input batch verified");

        Ok(values
            .into_iter()
            .map(|value| {
                let handle = CiphertextHandle(self.mint(b"ct"));
                self.values.insert(handle, value);
                handle
            })
            .collect())
    }

    fn trivial_zero(&mut self) -> Result<CiphertextHandle, FheError> {
        let handle = CiphertextHandle(self.mint(b"zero"));
        self.values.insert(handle, 0);
        Ok(handle)
    }

    fn add(
        &mut self,
        lhs: CiphertextHandle,
        rhs: CiphertextHandle,
    ) -> Result<CiphertextHandle, FheError> {
        let sum = self.resolve(lhs)?.wrapping_add(self.resolve(rhs)?);
        let handle = CiphertextHandle(self.mint(b"sum"));
        self.values.insert(handle, sum);
        Ok(handle)
    }

    fn grant_decrypt(
        &mut self,
        identity: &Identity,
        handle: CiphertextHandle,
    ) -> Result<(), FheError> {
        self.resolve(handle)?;
        self.grants.insert((*identity, handle));
        Ok(())
    }
}
