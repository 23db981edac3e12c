// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use tacit_engine::TallyEngine;
use tacit_fhe::mock::MockFhe;

pub fn execute(engine: &TallyEngine<MockFhe>) -> Result<()> {
    let count = engine.survey_count();
    if count == 0 {
        println!("no surveys yet");
        return Ok(());
    }

    for id in 0..count {
        let survey = engine.get_survey(id.into())?;
        if !survey.is_active {
            continue;
        }
        println!(
            "{}  {}  by {}  ({} questions, created {})",
            survey.id,
            survey.title,
            survey.creator,
            survey.question_count(),
            survey.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
    }
    Ok(())
}
