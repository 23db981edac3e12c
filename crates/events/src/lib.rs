// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod event;
mod identity;
mod survey_id;

pub use event::*;
pub use identity::*;
pub use survey_id::*;
