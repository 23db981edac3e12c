// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Rejected submissions must leave the ledger byte-for-byte unchanged.

use tacit_engine::{EngineError, SurveyId};
use tacit_fhe::{CiphertextHandle, InputProof};
use tacit_test_helpers::{
    encrypt_answers, one_hot, single_choice_draft, test_engine, test_identity,
};

#[test]
fn wrong_increment_count_is_rejected_without_mutation() {
    let creator = test_identity(1);
    let respondent = test_identity(2);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(3))
        .unwrap();
    let events_before = engine.events().len();

    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[vec![1, 0]]);
    let err = engine
        .submit_answer(respondent, survey_id, rows, proof)
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::IncrementLengthMismatch {
            question: 0,
            expected: 3,
            got: 2,
        }
    ));

    assert!(!engine.has_answered(survey_id, respondent));
    assert_eq!(engine.events().len(), events_before);
    let stats = engine.get_statistics(creator, survey_id).unwrap();
    assert!(stats[0].iter().all(CiphertextHandle::is_unset));

    // A corrected retry then succeeds.
    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(3, 2)]);
    engine.submit_answer(respondent, survey_id, rows, proof).unwrap();
    assert!(engine.has_answered(survey_id, respondent));
}

#[test]
fn garbage_proof_is_rejected_without_mutation() {
    let creator = test_identity(1);
    let respondent = test_identity(2);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(3))
        .unwrap();

    let (rows, _) = encrypt_answers(&mut engine, respondent, &[one_hot(3, 0)]);
    let err = engine
        .submit_answer(
            respondent,
            survey_id,
            rows,
            InputProof::new(vec![0xde, 0xad, 0xbe, 0xef]),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidProof(_)));
    assert!(!engine.has_answered(survey_id, respondent));
}

#[test]
fn proof_bound_to_another_destination_is_rejected() {
    let creator = test_identity(1);
    let respondent = test_identity(2);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(2))
        .unwrap();

    // Encrypt against a different destination than this engine.
    let elsewhere = test_identity(0x5E);
    let values = one_hot(2, 0);
    let (inputs, proof) =
        engine
            .backend_mut()
            .encrypt_input(&respondent, &elsewhere, &values);

    let err = engine
        .submit_answer(respondent, survey_id, vec![inputs], proof)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidProof(_)));
    assert!(!engine.has_answered(survey_id, respondent));
}

#[test]
fn answered_flags_do_not_leak_across_surveys() {
    let creator = test_identity(1);
    let respondent = test_identity(2);
    let mut engine = test_engine();
    let first = engine
        .create_survey(creator, single_choice_draft(2))
        .unwrap();
    let second = engine
        .create_survey(creator, single_choice_draft(2))
        .unwrap();

    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(2, 0)]);
    engine.submit_answer(respondent, first, rows, proof).unwrap();

    assert!(engine.has_answered(first, respondent));
    assert!(!engine.has_answered(second, respondent));

    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(2, 1)]);
    engine.submit_answer(respondent, second, rows, proof).unwrap();
    assert!(engine.has_answered(second, respondent));
}

#[test]
fn submissions_to_unknown_surveys_are_not_found() {
    let respondent = test_identity(2);
    let mut engine = test_engine();
    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(3, 0)]);
    let err = engine
        .submit_answer(respondent, SurveyId(0), rows, proof)
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { .. }));
}
