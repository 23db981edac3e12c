// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tacit_events::{Identity, SurveyId};

/// Per-(survey, respondent) answered flags. Set exactly once, never reset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RespondentLedger {
    answered: BTreeSet<(SurveyId, Identity)>,
}

impl RespondentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup. Never fails: an absent survey simply reads as
    /// unanswered, which keeps this safe for read-heavy polling.
    pub fn has_answered(&self, survey_id: SurveyId, identity: Identity) -> bool {
        self.answered.contains(&(survey_id, identity))
    }

    pub fn mark_answered(&mut self, survey_id: SurveyId, identity: Identity) {
        self.answered.insert((survey_id, identity));
    }
}
