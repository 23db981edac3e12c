// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Everything that can be wrong with a survey definition. All are
/// creation-time failures; the caller fixes the draft and resubmits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("survey must have at least one question")]
    EmptySurvey,

    #[error(
        "questions, types and option counts must have equal length: {questions}/{types}/{options}"
    )]
    SchemaMismatch {
        questions: usize,
        types: usize,
        options: usize,
    },

    #[error("question {question}: choice questions must have at least 2 options, got {got}")]
    TooFewOptions { question: usize, got: u32 },

    #[error("question {question}: rating must be between 2 and 10, got {got}")]
    RatingRangeInvalid { question: usize, got: u32 },

    #[error("question {question}: numeric input must have an option count of exactly 2, got {got}")]
    NumericInputShapeInvalid { question: usize, got: u32 },

    #[error("title exceeds {max} characters ({got})")]
    TitleTooLong { max: usize, got: usize },

    #[error("description exceeds {max} characters ({got})")]
    DescriptionTooLong { max: usize, got: usize },
}
