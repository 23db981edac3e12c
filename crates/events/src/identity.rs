// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid identity length: expected 20 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("invalid hex in identity: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 20-byte account identity. Creators and respondents are keyed by it, and
/// input proofs are bound to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(pub [u8; 20]);

impl Identity {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse from a hex string, with or without a leading `0x`.
    pub fn from_hex(s: &str) -> Result<Self, IdentityError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let arr: [u8; 20] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| IdentityError::InvalidLength { got: b.len() })?;
        Ok(Self(arr))
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identity::from_hex(s)
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
