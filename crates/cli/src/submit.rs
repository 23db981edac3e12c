// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::cli::SubmitArgs;
use anyhow::{Context, Result};
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;

/// Parse "1,0,0;0,1" into increment rows.
fn parse_answers(s: &str) -> Result<Vec<Vec<u64>>> {
    s.split(';')
        .map(|row| {
            row.split(',')
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .with_context(|| format!("invalid increment '{}'", value.trim()))
                })
                .collect()
        })
        .collect()
}

pub fn execute(engine: &mut TallyEngine<MockFhe>, args: SubmitArgs) -> Result<()> {
    let respondent: Identity = args.caller.parse().context("invalid --as identity")?;
    let rows = parse_answers(&args.answers)?;

    // Client side: encrypt locally, bound to this engine as destination.
    let destination = engine.identity();
    let flat: Vec<u64> = rows.iter().flatten().copied().collect();
    let (inputs, proof) = engine
        .backend_mut()
        .encrypt_input(&respondent, &destination, &flat);

    let mut grouped = Vec::with_capacity(rows.len());
    let mut cursor = inputs.into_iter();
    for row in &rows {
        grouped.push(cursor.by_ref().take(row.len()).collect());
    }

    engine.submit_answer(respondent, args.survey.into(), grouped, proof)?;
    println!("answer recorded for survey {}", args.survey);
    Ok(())
}
