// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tender_bid_domain::DomainError;

/// Errors that can occur during tender state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A rollback target belongs to a different tender.
    SnapshotMismatch {
        /// The tender being rolled back.
        tender_id: String,
        /// The tender the snapshot was taken from.
        snapshot_tender_id: String,
    },
    /// The version counter cannot be advanced.
    VersionOverflow(i32),
    /// An internal failure unrelated to the caller's input.
    Internal(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SnapshotMismatch {
                tender_id,
                snapshot_tender_id,
            } => write!(
                f,
                "Snapshot of tender '{snapshot_tender_id}' cannot be applied to tender '{tender_id}'"
            ),
            Self::VersionOverflow(version) => {
                write!(f, "Version {version} cannot be incremented")
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
