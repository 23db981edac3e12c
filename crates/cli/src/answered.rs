// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::cli::AnsweredArgs;
use anyhow::{Context, Result};
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;

pub fn execute(engine: &TallyEngine<MockFhe>, args: AnsweredArgs) -> Result<()> {
    let identity: Identity = args.caller.parse().context("invalid --as identity")?;

    let answered: Vec<u64> = (0..engine.survey_count())
        .filter(|&id| engine.has_answered(id.into(), identity))
        .collect();

    if answered.is_empty() {
        println!("{} has not answered any surveys", identity);
    } else {
        for id in answered {
            let survey = engine.get_survey(id.into())?;
            println!("{}  {}", survey.id, survey.title);
        }
    }
    Ok(())
}
