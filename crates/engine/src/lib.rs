// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The encrypted answer-aggregation engine.
//!
//! State lives on a single globally-ordered, append-only ledger: every
//! mutating operation is a finite, synchronous state transition, serialized
//! by the host. The engine holds no locks and never suspends; exclusivity
//! is expressed through `&mut self`.

mod engine;
mod error;
mod registry;
mod respondents;
mod tally;

pub use engine::*;
pub use error::*;
pub use registry::*;
pub use respondents::*;
pub use tally::*;

// Re-export the types dependents need so they can use tacit_engine alone.
pub use tacit_events::{Identity, SurveyId, TacitEvent};
pub use tacit_fhe::{CiphertextHandle, ExternalCiphertext, FheBackend, InputProof};
pub use tacit_survey::{QuestionType, SchemaError, Survey, SurveyDraft};
