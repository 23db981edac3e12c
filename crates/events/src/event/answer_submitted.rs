// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{Identity, SurveyId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Recorded once per (survey, respondent). Carries no answer content; the
/// increments themselves stay encrypted in the tally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSubmitted {
    pub survey_id: SurveyId,
    pub respondent: Identity,
}

impl Display for AnswerSubmitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "survey_id: {}, respondent: {}",
            self.survey_id, self.respondent
        )
    }
}
