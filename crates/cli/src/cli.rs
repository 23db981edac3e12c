// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Confidential survey tallies over a local, mock-encrypted ledger.
///
/// State persists between invocations in the configured state file, so a
/// whole survey lifecycle can be driven one command at a time.
#[derive(Parser)]
#[command(name = "tacit", version, about)]
pub struct Cli {
    /// Path to a tacit.config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a survey from parallel question/type/options lists
    Create(CreateArgs),
    /// Submit an encrypted answer batch to a survey
    Submit(SubmitArgs),
    /// Read a survey's encrypted tally matrix (creator only)
    Stats(StatsArgs),
    /// List all active surveys
    List,
    /// List the surveys an identity has answered
    Answered(AnsweredArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Creator identity (0x-prefixed hex, 20 bytes)
    #[arg(long = "as", value_name = "IDENTITY")]
    pub caller: String,

    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Question text; repeat once per question
    #[arg(long = "question", value_name = "TEXT")]
    pub questions: Vec<String>,

    /// Question type per question: single-choice | multiple-choice |
    /// rating | numeric-input
    #[arg(long = "question-type", value_name = "TYPE")]
    pub question_types: Vec<String>,

    /// Option count per question
    #[arg(long = "options", value_name = "COUNT")]
    pub option_counts: Vec<u32>,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Respondent identity
    #[arg(long = "as", value_name = "IDENTITY")]
    pub caller: String,

    #[arg(long)]
    pub survey: u64,

    /// Plaintext increments, rows separated by ';', values by ','
    /// (e.g. "1,0,0;0,1"). Encrypted locally before submission.
    #[arg(long)]
    pub answers: String,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Caller identity; must be the survey's creator
    #[arg(long = "as", value_name = "IDENTITY")]
    pub caller: String,

    #[arg(long)]
    pub survey: u64,

    /// Also decrypt the granted totals and print them as JSON
    #[arg(long)]
    pub decrypt: bool,
}

#[derive(Args)]
pub struct AnsweredArgs {
    /// Identity to look up
    #[arg(long = "as", value_name = "IDENTITY")]
    pub caller: String,
}
