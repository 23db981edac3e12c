// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::cli::CreateArgs;
use anyhow::{Context, Result};
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;
use tacit_survey::{QuestionType, SurveyDraft};

pub fn execute(engine: &mut TallyEngine<MockFhe>, args: CreateArgs) -> Result<()> {
    let creator: Identity = args.caller.parse().context("invalid --as identity")?;

    // The engine validates the parallel arrays itself; we only parse here.
    let question_types = args
        .question_types
        .iter()
        .map(|s| s.parse::<QuestionType>())
        .collect::<Result<Vec<_>, _>>()?;

    let survey_id = engine.create_survey(
        creator,
        SurveyDraft {
            title: args.title,
            description: args.description,
            questions: args.questions,
            question_types,
            option_counts: args.option_counts,
        },
    )?;

    println!("created survey {}", survey_id);
    Ok(())
}
