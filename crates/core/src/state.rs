// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::{Tender, TenderFields, TenderStatus, TenderVersion};

/// The result of applying a [`crate::TenderCommand`].
///
/// When `snapshot` is present it must be stored in the same transaction
/// as `new_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderTransition {
    /// The pre-change fields, keyed by the version being superseded.
    pub snapshot: Option<TenderVersion>,
    /// The tender after the command.
    pub new_state: Tender,
}

/// Inputs for a freshly created tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTender {
    pub id: String,
    pub fields: TenderFields,
    pub organization_id: String,
    pub creator_id: String,
}

/// What a bid decision does to the owning tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionOutcome {
    /// Status to write on the tender, if any.
    pub tender_status: Option<TenderStatus>,
}
