// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::EngineError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tacit_config::Limits;
use tacit_events::{Identity, SurveyId};
use tacit_survey::{Survey, SurveyDraft};

/// Append-only arena of surveys. Ids are positions; a survey is never
/// rewritten or removed once pushed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SurveyRegistry {
    surveys: Vec<Survey>,
}

impl SurveyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and commit it under the next sequential id,
    /// stamping commit time. No state changes on a failed validation.
    pub fn create(
        &mut self,
        creator: Identity,
        draft: SurveyDraft,
        limits: &Limits,
    ) -> Result<SurveyId, EngineError> {
        draft.validate(limits)?;
        let id = SurveyId(self.surveys.len() as u64);
        self.surveys
            .push(Survey::from_draft(id, creator, draft, Utc::now()));
        Ok(id)
    }

    pub fn get(&self, survey_id: SurveyId) -> Result<&Survey, EngineError> {
        self.surveys
            .get(survey_id.0 as usize)
            .ok_or(EngineError::NotFound { survey_id })
    }

    /// Total surveys ever created.
    pub fn count(&self) -> u64 {
        self.surveys.len() as u64
    }
}
