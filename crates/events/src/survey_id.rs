// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Sequential survey identifier. The registry assigns them starting at 0 and
/// never reuses one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurveyId(pub u64);

impl SurveyId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SurveyId {
    fn from(value: u64) -> Self {
        SurveyId(value)
    }
}

impl From<SurveyId> for u64 {
    fn from(value: SurveyId) -> Self {
        value.0
    }
}

impl Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
