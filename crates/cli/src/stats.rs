// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::cli::StatsArgs;
use anyhow::{Context, Result};
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;

pub fn execute(engine: &mut TallyEngine<MockFhe>, args: StatsArgs) -> Result<()> {
    let caller: Identity = args.caller.parse().context("invalid --as identity")?;
    let survey_id = args.survey.into();

    let stats = engine.get_statistics(caller, survey_id)?;

    for (question, row) in stats.iter().enumerate() {
        println!("question {}:", question);
        for (option, handle) in row.iter().enumerate() {
            if handle.is_unset() {
                println!("  option {}: <uninitialized>", option);
            } else {
                println!("  option {}: {}", option, handle);
            }
        }
    }

    if args.decrypt {
        // The read above granted decryption for every initialized handle;
        // the sentinel simply reads as zero.
        let totals: Vec<Vec<u64>> = stats
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&handle| {
                        if handle.is_unset() {
                            Ok(0)
                        } else {
                            engine.backend().decrypt(&caller, handle)
                        }
                    })
                    .collect::<Result<Vec<u64>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&totals)?);
    }

    Ok(())
}
