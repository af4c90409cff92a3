// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a tender.
///
/// Transitions driven by `setStatus` are unguarded: any status may be
/// written over any other, including reopening a closed tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderStatus {
    /// Initial state after creation.
    #[default]
    Created,
    /// Visible to bidders.
    Published,
    /// No longer accepting bids. Set explicitly or by approving a bid.
    Closed,
}

impl TenderStatus {
    /// Converts this status to its persisted and wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Published => "PUBLISHED",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for TenderStatus {
    type Err = DomainError;

    /// Parses a tender status, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATED" => Ok(Self::Created),
            "PUBLISHED" => Ok(Self::Published),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidTenderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a bid.
///
/// Only `Created` is written by the service today. `Approved` and
/// `Rejected` are reserved for a decision path that updates the bid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    #[default]
    Created,
    Approved,
    Rejected,
}

impl BidStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for BidStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidBidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tender creator's decision on a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidDecision(s.to_string())),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who a bid is submitted on behalf of.
///
/// Either way `author_id` must name an existing employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorType {
    Organization,
    User,
}

impl AuthorType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::User => "User",
        }
    }
}

impl FromStr for AuthorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Organization" => Ok(Self::Organization),
            "User" => Ok(Self::User),
            _ => Err(DomainError::InvalidAuthorType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuthorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Legal form of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Individual entrepreneur.
    #[serde(rename = "IE")]
    IndividualEntrepreneur,
    /// Limited liability company.
    #[serde(rename = "LLC")]
    LimitedLiabilityCompany,
    /// Joint-stock company.
    #[serde(rename = "JSC")]
    JointStockCompany,
}

impl OrganizationType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IndividualEntrepreneur => "IE",
            Self::LimitedLiabilityCompany => "LLC",
            Self::JointStockCompany => "JSC",
        }
    }
}

impl FromStr for OrganizationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IE" => Ok(Self::IndividualEntrepreneur),
            "LLC" => Ok(Self::LimitedLiabilityCompany),
            "JSC" => Ok(Self::JointStockCompany),
            _ => Err(DomainError::InvalidOrganizationType(s.to_string())),
        }
    }
}
