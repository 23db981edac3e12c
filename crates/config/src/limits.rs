// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TITLE_LEN: usize = 100;
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 500;

/// Length bounds the registry enforces on free-text survey fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_title_len: usize,
    pub max_description_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}
