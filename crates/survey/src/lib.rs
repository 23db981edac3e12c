// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod error;
mod question_type;
mod survey;

pub use error::*;
pub use question_type::*;
pub use survey::*;
