// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod answer_submitted;
mod statistics_accessed;
mod survey_created;

pub use answer_submitted::*;
pub use statistics_accessed::*;
pub use survey_created::*;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Macro to help define From traits for TacitEvent
macro_rules! impl_from_event {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for TacitEvent {
                fn from(data: $variant) -> Self {
                    TacitEvent::$variant(data)
                }
            }
        )*
    };
}

/// Everything the ledger records about the engine's state transitions. The
/// log is append-only; events are never rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TacitEvent {
    SurveyCreated(SurveyCreated),
    AnswerSubmitted(AnswerSubmitted),
    StatisticsAccessed(StatisticsAccessed),
}

impl_from_event!(SurveyCreated, AnswerSubmitted, StatisticsAccessed);

impl TacitEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TacitEvent::SurveyCreated(_) => "SurveyCreated",
            TacitEvent::AnswerSubmitted(_) => "AnswerSubmitted",
            TacitEvent::StatisticsAccessed(_) => "StatisticsAccessed",
        }
    }
}

impl Display for TacitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TacitEvent::SurveyCreated(data) => write!(f, "SurveyCreated({})", data),
            TacitEvent::AnswerSubmitted(data) => write!(f, "AnswerSubmitted({})", data),
            TacitEvent::StatisticsAccessed(data) => write!(f, "StatisticsAccessed({})", data),
        }
    }
}
