// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Closed set of question kinds. Option-count validation here and the
/// per-question shape check at submission are the only two places that
/// branch on it; a new kind means updating exactly those two matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Mutually exclusive options; the option count is the number of them.
    SingleChoice,
    /// Independently selectable options.
    MultipleChoice,
    /// Discrete rating levels.
    Rating,
    /// Free numeric answer. The option count is fixed at 2: slot 0 carries
    /// the running sum of answers, slot 1 the running response count.
    NumericInput,
}

impl QuestionType {
    /// The authoritative option-count rule for this kind.
    pub fn validate_option_count(&self, question: usize, got: u32) -> Result<(), SchemaError> {
        match self {
            QuestionType::SingleChoice | QuestionType::MultipleChoice => {
                if got < 2 {
                    return Err(SchemaError::TooFewOptions { question, got });
                }
            }
            QuestionType::Rating => {
                if !(2..=10).contains(&got) {
                    return Err(SchemaError::RatingRangeInvalid { question, got });
                }
            }
            QuestionType::NumericInput => {
                if got != 2 {
                    return Err(SchemaError::NumericInputShapeInvalid { question, got });
                }
            }
        }
        Ok(())
    }
}

impl Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionType::SingleChoice => "single-choice",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Rating => "rating",
            QuestionType::NumericInput => "numeric-input",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
#[error("unknown question type '{0}', expected one of: single-choice, multiple-choice, rating, numeric-input")]
pub struct ParseQuestionTypeError(String);

impl FromStr for QuestionType {
    type Err = ParseQuestionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-choice" => Ok(QuestionType::SingleChoice),
            "multiple-choice" => Ok(QuestionType::MultipleChoice),
            "rating" => Ok(QuestionType::Rating),
            "numeric-input" => Ok(QuestionType::NumericInput),
            other => Err(ParseQuestionTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_count_rules() {
        assert!(QuestionType::SingleChoice.validate_option_count(0, 2).is_ok());
        assert_eq!(
            QuestionType::SingleChoice.validate_option_count(0, 1),
            Err(SchemaError::TooFewOptions { question: 0, got: 1 })
        );
        assert!(QuestionType::MultipleChoice.validate_option_count(0, 5).is_ok());
        assert!(QuestionType::Rating.validate_option_count(0, 10).is_ok());
        assert_eq!(
            QuestionType::Rating.validate_option_count(1, 11),
            Err(SchemaError::RatingRangeInvalid { question: 1, got: 11 })
        );
        assert_eq!(
            QuestionType::Rating.validate_option_count(1, 1),
            Err(SchemaError::RatingRangeInvalid { question: 1, got: 1 })
        );
        assert!(QuestionType::NumericInput.validate_option_count(0, 2).is_ok());
        assert_eq!(
            QuestionType::NumericInput.validate_option_count(2, 1),
            Err(SchemaError::NumericInputShapeInvalid { question: 2, got: 1 })
        );
    }

    #[test]
    fn parse_round_trip() {
        for qt in [
            QuestionType::SingleChoice,
            QuestionType::MultipleChoice,
            QuestionType::Rating,
            QuestionType::NumericInput,
        ] {
            assert_eq!(qt.to_string().parse::<QuestionType>().unwrap(), qt);
        }
        assert!("likert".parse::<QuestionType>().is_err());
    }
}
