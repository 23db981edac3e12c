// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The full survey lifecycle: create, answer, read statistics, decrypt.

use tacit_engine::{EngineError, SurveyId};
use tacit_fhe::CiphertextHandle;
use tacit_survey::{QuestionType, SurveyDraft};
use tacit_test_helpers::{
    encrypt_answers, one_hot, single_choice_draft, test_engine, test_identity,
};

#[test]
fn end_to_end_single_choice_survey() {
    let creator = test_identity(1);
    let respondent = test_identity(2);
    let outsider = test_identity(3);
    let mut engine = test_engine();

    // Create: one single-choice question with three options.
    let survey_id = engine
        .create_survey(creator, single_choice_draft(3))
        .unwrap();
    assert_eq!(survey_id, SurveyId(0));
    assert_eq!(engine.survey_count(), 1);

    // Respondent A submits [1, 0, 0].
    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(3, 0)]);
    engine.submit_answer(respondent, survey_id, rows, proof).unwrap();
    assert!(engine.has_answered(survey_id, respondent));

    // A second submission by A fails and changes nothing.
    let (rows, proof) = encrypt_answers(&mut engine, respondent, &[one_hot(3, 1)]);
    let err = engine
        .submit_answer(respondent, survey_id, rows, proof)
        .unwrap_err();
    assert!(matches!(err, EngineError::AlreadyAnswered { .. }));

    // Statistics by a non-creator are refused.
    let err = engine.get_statistics(outsider, survey_id).unwrap_err();
    assert!(matches!(err, EngineError::Unauthorized { .. }));

    // The creator reads and decrypts totals [1, 0, 0].
    let stats = engine.get_statistics(creator, survey_id).unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].len(), 3);
    let totals: Vec<u64> = stats[0]
        .iter()
        .map(|&handle| engine.backend().decrypt(&creator, handle).unwrap())
        .collect();
    assert_eq!(totals, vec![1, 0, 0]);
}

#[test]
fn multi_question_survey_tallies_every_question() {
    let creator = test_identity(1);
    let mut engine = test_engine();

    let draft = SurveyDraft {
        title: "Team retrospective".to_string(),
        description: "Quarterly pulse".to_string(),
        questions: vec![
            "Which day suits you?".to_string(),
            "Rate the quarter".to_string(),
            "How many incidents did you handle?".to_string(),
        ],
        question_types: vec![
            QuestionType::MultipleChoice,
            QuestionType::Rating,
            QuestionType::NumericInput,
        ],
        option_counts: vec![2, 5, 2],
    };
    let survey_id = engine.create_survey(creator, draft).unwrap();

    // Two respondents; the numeric question accumulates sum and count.
    let answers_a = vec![vec![1, 1], one_hot(5, 4), vec![3, 1]];
    let answers_b = vec![vec![0, 1], one_hot(5, 2), vec![7, 1]];
    for (n, answers) in [(10u8, answers_a), (11u8, answers_b)] {
        let who = test_identity(n);
        let (rows, proof) = encrypt_answers(&mut engine, who, &answers);
        engine.submit_answer(who, survey_id, rows, proof).unwrap();
    }

    let stats = engine.get_statistics(creator, survey_id).unwrap();
    let decrypt_row = |row: &[CiphertextHandle]| -> Vec<u64> {
        row.iter()
            .map(|&handle| engine.backend().decrypt(&creator, handle).unwrap())
            .collect()
    };
    assert_eq!(decrypt_row(&stats[0]), vec![1, 2]);
    assert_eq!(decrypt_row(&stats[1]), vec![0, 0, 1, 0, 1]);
    // Numeric: running sum 3 + 7, response count 1 + 1.
    assert_eq!(decrypt_row(&stats[2]), vec![10, 2]);
}

#[test]
fn statistics_of_an_unanswered_survey_are_all_sentinels() {
    let creator = test_identity(1);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(4))
        .unwrap();

    let stats = engine.get_statistics(creator, survey_id).unwrap();
    assert_eq!(stats[0].len(), 4);
    assert!(stats[0].iter().all(CiphertextHandle::is_unset));

    // The sentinel means count-zero; decrypting it is refused outright.
    let err = engine
        .backend()
        .decrypt(&creator, CiphertextHandle::UNSET)
        .unwrap_err();
    assert!(matches!(err, tacit_fhe::FheError::SentinelDecrypt));
}

#[test]
fn get_survey_exposes_the_declared_schema() {
    let creator = test_identity(1);
    let mut engine = test_engine();
    let survey_id = engine
        .create_survey(creator, single_choice_draft(3))
        .unwrap();

    let survey = engine.get_survey(survey_id).unwrap();
    assert_eq!(survey.question_count(), 1);
    assert_eq!(survey.option_indices(0), Some(vec![0, 1, 2]));
    assert_eq!(survey.question_types[0], QuestionType::SingleChoice);

    assert!(matches!(
        engine.get_survey(SurveyId(1)),
        Err(EngineError::NotFound { .. })
    ));
}

#[test]
fn has_answered_is_safe_on_absent_surveys() {
    let engine = test_engine();
    // Unlike get_survey, this read deliberately does not error for an
    // unknown id; it reads as unanswered.
    assert!(!engine.has_answered(SurveyId(42), test_identity(2)));
}
