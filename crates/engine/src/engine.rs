// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{EngineError, RespondentLedger, SurveyRegistry, TallyStore};
use serde::{Deserialize, Serialize};
use tacit_config::Limits;
use tacit_events::{
    AnswerSubmitted, Identity, StatisticsAccessed, SurveyCreated, SurveyId, TacitEvent,
};
use tacit_fhe::{CiphertextHandle, ExternalCiphertext, FheBackend, InputProof};
use tacit_survey::{Survey, SurveyDraft};
use tracing::info;

/// The ledger-facing facade over registry, tally store and respondent
/// ledger, generic over the encrypted integer substrate.
///
/// `identity` is the engine's own account on the ledger; input proofs must
/// be bound to it as their destination.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TallyEngine<B> {
    identity: Identity,
    limits: Limits,
    backend: B,
    registry: SurveyRegistry,
    tallies: TallyStore,
    respondents: RespondentLedger,
    events: Vec<TacitEvent>,
}

impl<B: FheBackend> TallyEngine<B> {
    pub fn new(identity: Identity, backend: B) -> Self {
        Self::with_limits(identity, backend, Limits::default())
    }

    pub fn with_limits(identity: Identity, backend: B, limits: Limits) -> Self {
        Self {
            identity,
            limits,
            backend,
            registry: SurveyRegistry::new(),
            tallies: TallyStore::new(),
            respondents: RespondentLedger::new(),
            events: Vec::new(),
        }
    }

    /// The engine's ledger identity; clients bind input proofs to it.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Validate and register a survey, returning its sequential id.
    pub fn create_survey(
        &mut self,
        creator: Identity,
        draft: SurveyDraft,
    ) -> Result<SurveyId, EngineError> {
        let question_count = draft.questions.len();
        let survey_id = self.registry.create(creator, draft, &self.limits)?;
        self.events.push(
            SurveyCreated {
                survey_id,
                creator,
                question_count,
            }
            .into(),
        );
        info!(survey_id = %survey_id, creator = %creator, question_count, "survey created");
        Ok(survey_id)
    }

    /// Ingest one respondent's encrypted answer batch.
    ///
    /// Checks run in order: survey resolution, answered flag, shape against
    /// the declared schema (before any cryptography, to fail cheaply on
    /// malformed input), then batch proof verification. Only after all of
    /// them does any state change. The increment *values* are deliberately
    /// not inspected: a well-shaped, well-proved batch with dishonest
    /// values (say, a single-choice row that does not sum to one) is
    /// accepted — rejecting it would require revealing plaintext structure.
    /// That trust boundary sits with the client, not this engine.
    pub fn submit_answer(
        &mut self,
        caller: Identity,
        survey_id: SurveyId,
        increments: Vec<Vec<ExternalCiphertext>>,
        proof: InputProof,
    ) -> Result<(), EngineError> {
        let survey = self.registry.get(survey_id)?;
        if !survey.is_active {
            return Err(EngineError::SurveyInactive { survey_id });
        }
        if self.respondents.has_answered(survey_id, caller) {
            return Err(EngineError::AlreadyAnswered { survey_id });
        }

        let question_count = survey.question_count();
        for question in 0..question_count {
            let expected = survey.option_counts[question] as usize;
            let got = increments.get(question).map_or(0, Vec::len);
            if got != expected {
                return Err(EngineError::IncrementLengthMismatch {
                    question,
                    expected,
                    got,
                });
            }
        }
        if increments.len() > question_count {
            // Rows beyond the schema are as malformed as missing ones.
            return Err(EngineError::IncrementLengthMismatch {
                question: question_count,
                expected: 0,
                got: increments[question_count].len(),
            });
        }

        // One attestation covers the whole flattened batch, bound to the
        // caller and to this engine.
        let flattened: Vec<ExternalCiphertext> =
            increments.iter().flatten().copied().collect();
        let handles = self
            .backend
            .verify_input_batch(&flattened, &proof, &caller, &self.identity)
            .map_err(EngineError::InvalidProof)?;

        // Regroup the verified handles into the submitted row shape.
        let mut rows: Vec<Vec<CiphertextHandle>> = Vec::with_capacity(question_count);
        let mut cursor = handles.into_iter();
        for question in 0..question_count {
            let count = survey.option_counts[question] as usize;
            rows.push(cursor.by_ref().take(count).collect());
        }

        // Commit point. Everything below operates on handles the substrate
        // just minted, so it cannot fail for a conforming backend.
        self.respondents.mark_answered(survey_id, caller);
        self.tallies
            .accumulate(&mut self.backend, survey_id, &rows)?;
        self.events.push(
            AnswerSubmitted {
                survey_id,
                respondent: caller,
            }
            .into(),
        );
        info!(survey_id = %survey_id, respondent = %caller, "answer submitted");
        Ok(())
    }

    /// The full question × option matrix of encrypted accumulators,
    /// restricted to the survey's creator. Each initialized handle is
    /// granted to the caller for external decryption; never-written
    /// counters come back as the uninitialized sentinel, which callers
    /// treat as count-zero without decrypting.
    pub fn get_statistics(
        &mut self,
        caller: Identity,
        survey_id: SurveyId,
    ) -> Result<Vec<Vec<CiphertextHandle>>, EngineError> {
        let survey = self.registry.get(survey_id)?;
        if survey.creator != caller {
            return Err(EngineError::Unauthorized { survey_id });
        }

        let mut matrix = Vec::with_capacity(survey.question_count());
        for (question, &count) in survey.option_counts.iter().enumerate() {
            let mut row = Vec::with_capacity(count as usize);
            for option in 0..count {
                let handle = self.tallies.handle(survey_id, question as u32, option);
                if !handle.is_unset() {
                    self.backend.grant_decrypt(&caller, handle)?;
                }
                row.push(handle);
            }
            matrix.push(row);
        }

        self.events.push(
            StatisticsAccessed {
                survey_id,
                creator: caller,
            }
            .into(),
        );
        info!(survey_id = %survey_id, creator = %caller, "statistics access granted");
        Ok(matrix)
    }

    pub fn get_survey(&self, survey_id: SurveyId) -> Result<&Survey, EngineError> {
        self.registry.get(survey_id)
    }

    /// Total surveys ever created.
    pub fn survey_count(&self) -> u64 {
        self.registry.count()
    }

    /// Whether `identity` has answered `survey_id`. Absent surveys read as
    /// unanswered rather than erroring.
    pub fn has_answered(&self, survey_id: SurveyId, identity: Identity) -> bool {
        self.respondents.has_answered(survey_id, identity)
    }

    /// The append-only event log, oldest first.
    pub fn events(&self) -> &[TacitEvent] {
        &self.events
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the substrate, for the client-side operations a
    /// local backend provides (input encryption, user decryption). The
    /// engine's own invariants live entirely in its tables.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
