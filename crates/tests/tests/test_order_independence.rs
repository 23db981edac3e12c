// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Homomorphic addition is commutative and associative, so the final
//! tallies must not depend on the order the ledger commits submissions in.

use proptest::prelude::*;
use tacit_test_helpers::{encrypt_answers, one_hot, single_choice_draft, test_engine, test_identity};

const OPTIONS: usize = 3;

/// Run every (respondent, choice) submission in the given order against a
/// fresh engine and return the decrypted totals.
fn decrypted_totals(choices: &[usize], order: &[usize]) -> Vec<u64> {
    let creator = test_identity(1);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(OPTIONS as u32))
        .unwrap();

    for &i in order {
        let respondent = test_identity(10 + i as u8);
        let (rows, proof) =
            encrypt_answers(&mut engine, respondent, &[one_hot(OPTIONS, choices[i])]);
        engine
            .submit_answer(respondent, survey_id, rows, proof)
            .unwrap();
    }

    let stats = engine.get_statistics(creator, survey_id).unwrap();
    stats[0]
        .iter()
        .map(|&handle| {
            if handle.is_unset() {
                0
            } else {
                engine.backend().decrypt(&creator, handle).unwrap()
            }
        })
        .collect()
}

fn submission_sets() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    proptest::collection::vec(0usize..OPTIONS, 1..8).prop_flat_map(|choices| {
        let indices: Vec<usize> = (0..choices.len()).collect();
        (Just(choices), Just(indices).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn totals_match_for_any_commit_order((choices, shuffled) in submission_sets()) {
        let committed: Vec<usize> = (0..choices.len()).collect();
        let baseline = decrypted_totals(&choices, &committed);
        let reordered = decrypted_totals(&choices, &shuffled);

        prop_assert_eq!(&baseline, &reordered);
        prop_assert_eq!(
            baseline.iter().sum::<u64>(),
            choices.len() as u64
        );
    }
}

#[test]
fn two_respondents_either_order() {
    // choices: respondent 0 picks option 2, respondent 1 picks option 0.
    let choices = [2, 0];
    assert_eq!(
        decrypted_totals(&choices, &[0, 1]),
        decrypted_totals(&choices, &[1, 0])
    );
    assert_eq!(decrypted_totals(&choices, &[0, 1]), vec![1, 0, 1]);
}
