// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use tacit_events::SurveyId;
use tacit_fhe::FheError;
use tacit_survey::SchemaError;
use thiserror::Error;

/// Every way an engine operation can fail. All kinds are deterministic
/// input-validation or authorization failures; a failed operation leaves
/// state unchanged and may be retried with corrected input.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("survey {survey_id} does not exist")]
    NotFound { survey_id: SurveyId },

    #[error("survey {survey_id} is not accepting answers")]
    SurveyInactive { survey_id: SurveyId },

    #[error("already answered survey {survey_id}")]
    AlreadyAnswered { survey_id: SurveyId },

    #[error("question {question}: expected {expected} encrypted increments, got {got}")]
    IncrementLengthMismatch {
        question: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid input proof: {0}")]
    InvalidProof(#[source] FheError),

    #[error("only the survey creator may view statistics for survey {survey_id}")]
    Unauthorized { survey_id: SurveyId },

    /// The substrate refused an operation on handles the engine minted
    /// through it. Unreachable with a conforming backend.
    #[error("encrypted substrate rejected an operation: {0}")]
    Substrate(#[from] FheError),
}
