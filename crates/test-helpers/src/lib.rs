// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Fixtures shared by the workspace's unit and integration tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;
use tacit_fhe::{ExternalCiphertext, InputProof};
use tacit_survey::{QuestionType, SurveyDraft};

/// A deterministic identity: byte `n` repeated.
pub fn test_identity(n: u8) -> Identity {
    Identity::new([n; 20])
}

/// Distinct pseudo-random identities from a fixed seed.
pub fn random_identities(count: usize, seed: u64) -> Vec<Identity> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes[..]);
            Identity::new(bytes)
        })
        .collect()
}

/// An engine over a fresh mock substrate under a fixed ledger identity.
pub fn test_engine() -> TallyEngine<MockFhe> {
    TallyEngine::new(test_identity(0xEE), MockFhe::new())
}

pub fn single_choice_draft(options: u32) -> SurveyDraft {
    SurveyDraft {
        title: "Test Survey".to_string(),
        description: "A test survey".to_string(),
        questions: vec!["What is your favorite color?".to_string()],
        question_types: vec![QuestionType::SingleChoice],
        option_counts: vec![options],
    }
}

/// A one-hot increment row: 1 at `selected`, 0 elsewhere.
pub fn one_hot(len: usize, selected: usize) -> Vec<u64> {
    (0..len).map(|i| u64::from(i == selected)).collect()
}

/// Encrypt a full answer batch against the engine's backend, bound to the
/// engine as destination, and regroup the external ciphertexts into the
/// submitted row shape.
pub fn encrypt_answers(
    engine: &mut TallyEngine<MockFhe>,
    submitter: Identity,
    rows: &[Vec<u64>],
) -> (Vec<Vec<ExternalCiphertext>>, InputProof) {
    let destination = engine.identity();
    let flat: Vec<u64> = rows.iter().flatten().copied().collect();
    let (inputs, proof) = engine
        .backend_mut()
        .encrypt_input(&submitter, &destination, &flat);

    let mut grouped = Vec::with_capacity(rows.len());
    let mut cursor = inputs.into_iter();
    for row in rows {
        grouped.push(cursor.by_ref().take(row.len()).collect());
    }
    (grouped, proof)
}
