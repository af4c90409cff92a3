// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AuthorType, BidStatus, TenderStatus};

/// The mutable, versioned fields of a tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderFields {
    pub name: String,
    pub description: String,
    pub service_type: String,
}

impl TenderFields {
    #[must_use]
    pub fn new(name: &str, description: &str, service_type: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            service_type: service_type.to_string(),
        }
    }
}

/// A partial edit of a tender's mutable fields.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenderEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub service_type: Option<String>,
}

impl TenderEdit {
    /// Returns whether the edit names no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.service_type.is_none()
    }

    /// Overlays the provided fields onto `current`.
    #[must_use]
    pub fn apply_to(&self, current: &TenderFields) -> TenderFields {
        TenderFields {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            service_type: self
                .service_type
                .clone()
                .unwrap_or_else(|| current.service_type.clone()),
        }
    }
}

/// The live state of a tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tender {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub organization_id: String,
    pub creator_id: String,
    pub status: TenderStatus,
    /// Starts at 1; edit and rollback each add exactly 1.
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Tender {
    /// Returns the tender's versioned fields.
    #[must_use]
    pub fn fields(&self) -> TenderFields {
        TenderFields {
            name: self.name.clone(),
            description: self.description.clone(),
            service_type: self.service_type.clone(),
        }
    }

    /// Captures the current versioned fields as a snapshot row.
    #[must_use]
    pub fn snapshot(&self, created_at: &str) -> TenderVersion {
        TenderVersion {
            tender_id: self.id.clone(),
            version: self.version,
            name: self.name.clone(),
            description: self.description.clone(),
            service_type: self.service_type.clone(),
            created_at: created_at.to_string(),
        }
    }
}

/// A stored copy of a tender's versioned fields at a superseded version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderVersion {
    pub tender_id: String,
    pub version: i32,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub created_at: String,
}

impl TenderVersion {
    #[must_use]
    pub fn fields(&self) -> TenderFields {
        TenderFields {
            name: self.name.clone(),
            description: self.description.clone(),
            service_type: self.service_type.clone(),
        }
    }
}

/// A proposal submitted against a tender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: BidStatus,
    pub tender_id: String,
    pub author_type: AuthorType,
    pub author_id: String,
    pub version: i32,
    pub created_at: String,
}
