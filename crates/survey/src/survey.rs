// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{QuestionType, SchemaError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tacit_config::Limits;
use tacit_events::{Identity, SurveyId};

/// What a creator submits. Becomes a [`Survey`] only after validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
    pub question_types: Vec<QuestionType>,
    pub option_counts: Vec<u32>,
}

impl SurveyDraft {
    /// Whole-draft validation. Any failure rejects the entire draft; a
    /// passing draft satisfies the parallel-array invariant and every
    /// per-question option-count rule.
    pub fn validate(&self, limits: &Limits) -> Result<(), SchemaError> {
        if self.questions.is_empty() {
            return Err(SchemaError::EmptySurvey);
        }
        if self.question_types.len() != self.questions.len()
            || self.option_counts.len() != self.questions.len()
        {
            return Err(SchemaError::SchemaMismatch {
                questions: self.questions.len(),
                types: self.question_types.len(),
                options: self.option_counts.len(),
            });
        }
        for (question, (question_type, &count)) in self
            .question_types
            .iter()
            .zip(self.option_counts.iter())
            .enumerate()
        {
            question_type.validate_option_count(question, count)?;
        }
        if self.title.chars().count() > limits.max_title_len {
            return Err(SchemaError::TitleTooLong {
                max: limits.max_title_len,
                got: self.title.chars().count(),
            });
        }
        if self.description.chars().count() > limits.max_description_len {
            return Err(SchemaError::DescriptionTooLong {
                max: limits.max_description_len,
                got: self.description.chars().count(),
            });
        }
        Ok(())
    }
}

/// A registered survey. Immutable once created; the registry never rewrites
/// or deletes one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: SurveyId,
    pub creator: Identity,
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
    pub question_types: Vec<QuestionType>,
    pub option_counts: Vec<u32>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Survey {
    /// Build from a draft the caller has already validated.
    pub fn from_draft(
        id: SurveyId,
        creator: Identity,
        draft: SurveyDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            creator,
            title: draft.title,
            description: draft.description,
            questions: draft.questions,
            question_types: draft.question_types,
            option_counts: draft.option_counts,
            created_at,
            is_active: true,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The valid option indices for `question`, derived from its option
    /// count. `None` if the question index is out of range.
    pub fn option_indices(&self, question: usize) -> Option<Vec<u32>> {
        self.option_counts
            .get(question)
            .map(|&count| (0..count).collect())
    }
}
