// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::fs;
use tacit_config::AppConfig;
use tacit_engine::TallyEngine;
use tacit_events::Identity;
use tacit_fhe::mock::MockFhe;
use tracing::debug;

/// The ledger identity this local engine answers under; input proofs are
/// bound to it as their destination.
pub const ENGINE_IDENTITY: &str = "0x7ac1700000000000000000000000000000000001";

/// Load the engine from the configured state file, or start a fresh one
/// backed by a seeded mock substrate if no file exists yet.
pub fn load(config: &AppConfig) -> Result<TallyEngine<MockFhe>> {
    if config.state_file.exists() {
        let bytes = fs::read(&config.state_file)
            .with_context(|| format!("could not read {}", config.state_file.display()))?;
        let engine = bincode::deserialize(&bytes)
            .with_context(|| format!("corrupt state file {}", config.state_file.display()))?;
        debug!(path = %config.state_file.display(), "state loaded");
        Ok(engine)
    } else {
        let identity = Identity::from_hex(ENGINE_IDENTITY)?;
        Ok(TallyEngine::with_limits(
            identity,
            MockFhe::seeded(config.mock_seed),
            config.limits,
        ))
    }
}

pub fn save(config: &AppConfig, engine: &TallyEngine<MockFhe>) -> Result<()> {
    let bytes = bincode::serialize(engine).context("could not serialize engine state")?;
    fs::write(&config.state_file, bytes)
        .with_context(|| format!("could not write {}", config.state_file.display()))?;
    debug!(path = %config.state_file.display(), "state saved");
    Ok(())
}
