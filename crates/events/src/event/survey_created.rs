// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{Identity, SurveyId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyCreated {
    pub survey_id: SurveyId,
    pub creator: Identity,
    pub question_count: usize,
}

impl Display for SurveyCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "survey_id: {}, creator: {}, question_count: {}",
            self.survey_id, self.creator, self.question_count
        )
    }
}
