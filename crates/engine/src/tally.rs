// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tacit_events::SurveyId;
use tacit_fhe::{CiphertextHandle, FheBackend, FheError};

/// Per-(survey, question, option) encrypted accumulators.
///
/// An absent key is the uninitialized sentinel and reads back as
/// [`CiphertextHandle::UNSET`]. Entries are only ever replaced by the
/// homomorphic sum of themselves and a verified increment; since addition
/// is commutative and associative, the final totals do not depend on
/// submission order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TallyStore {
    counters: BTreeMap<(SurveyId, u32, u32), CiphertextHandle>,
}

impl TallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulator handle, or the sentinel if never written.
    pub fn handle(&self, survey_id: SurveyId, question: u32, option: u32) -> CiphertextHandle {
        self.counters
            .get(&(survey_id, question, option))
            .copied()
            .unwrap_or(CiphertextHandle::UNSET)
    }

    /// Fold one verified increment batch into the counters, row-major. An
    /// accumulator seen for the first time is initialized with the
    /// substrate's trivial zero before the addition.
    pub fn accumulate<B: FheBackend>(
        &mut self,
        backend: &mut B,
        survey_id: SurveyId,
        rows: &[Vec<CiphertextHandle>],
    ) -> Result<(), FheError> {
        for (question, row) in rows.iter().enumerate() {
            for (option, &increment) in row.iter().enumerate() {
                let key = (survey_id, question as u32, option as u32);
                let current = match self.counters.get(&key) {
                    Some(&handle) => handle,
                    None => backend.trivial_zero()?,
                };
                let sum = backend.add(current, increment)?;
                self.counters.insert(key, sum);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tacit_events::Identity;
    use tacit_fhe::mock::MockFhe;

    #[test]
    fn unwritten_counters_read_as_the_sentinel() {
        let tallies = TallyStore::new();
        assert!(tallies.handle(SurveyId(0), 0, 0).is_unset());
    }

    #[test]
    fn accumulate_initializes_then_sums() {
        let alice = Identity::new([1; 20]);
        let dest = Identity::new([2; 20]);
        let mut fhe = MockFhe::new();
        let mut tallies = TallyStore::new();

        for _ in 0..2 {
            let (inputs, proof) = fhe.encrypt_input(&alice, &dest, &[1, 0]);
            let handles = fhe
                .verify_input_batch(&inputs, &proof, &alice, &dest)
                .unwrap();
            tallies
                .accumulate(&mut fhe, SurveyId(0), &[handles])
                .unwrap();
        }

        let handle = tallies.handle(SurveyId(0), 0, 0);
        assert!(!handle.is_unset());
        fhe.grant_decrypt(&alice, handle).unwrap();
        assert_eq!(fhe.decrypt(&alice, handle).unwrap(), 2);

        let other = tallies.handle(SurveyId(0), 0, 1);
        fhe.grant_decrypt(&alice, other).unwrap();
        assert_eq!(fhe.decrypt(&alice, other).unwrap(), 0);
    }
}
