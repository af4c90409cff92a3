// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::{TenderEdit, TenderStatus, TenderVersion};

/// A requested change to an existing tender, expressed as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenderCommand {
    /// Overwrite some of the versioned fields.
    Edit(TenderEdit),
    /// Restore the versioned fields from a stored snapshot.
    ///
    /// The version counter still advances.
    Rollback {
        /// The snapshot to restore.
        target: TenderVersion,
    },
    /// Write a new lifecycle status. Not versioned.
    SetStatus(TenderStatus),
}

impl TenderCommand {
    /// Returns a short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Edit",
            Self::Rollback { .. } => "Rollback",
            Self::SetStatus(_) => "SetStatus",
        }
    }
}
