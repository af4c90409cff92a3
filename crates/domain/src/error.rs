// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tender status is not one of the enumerated values.
    InvalidTenderStatus(String),
    /// Bid status is not one of the enumerated values.
    InvalidBidStatus(String),
    /// Decision is not `Approved` or `Rejected`.
    InvalidDecision(String),
    /// Bid author type is not `Organization` or `User`.
    InvalidAuthorType(String),
    /// Organization type is not one of the enumerated values.
    InvalidOrganizationType(String),
    /// Name is empty or too long.
    InvalidName(String),
    /// Description is too long.
    InvalidDescription(String),
    /// Service type is empty or too long.
    InvalidServiceType(String),
    /// An identifier (username, tender id, ...) is empty.
    InvalidIdentifier {
        /// The field carrying the identifier.
        field: &'static str,
    },
    /// A partial edit carried no fields.
    NoFieldsToUpdate,
    /// A version number is outside the valid range.
    InvalidVersion(i32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTenderStatus(status) => {
                write!(
                    f,
                    "Invalid tender status: '{status}'. Must be CREATED, PUBLISHED or CLOSED"
                )
            }
            Self::InvalidBidStatus(status) => write!(f, "Invalid bid status: '{status}'"),
            Self::InvalidDecision(decision) => {
                write!(
                    f,
                    "Invalid decision: '{decision}'. Must be Approved or Rejected"
                )
            }
            Self::InvalidAuthorType(author_type) => {
                write!(
                    f,
                    "Invalid author type: '{author_type}'. Must be Organization or User"
                )
            }
            Self::InvalidOrganizationType(org_type) => {
                write!(f, "Invalid organization type: '{org_type}'")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidServiceType(msg) => write!(f, "Invalid service type: {msg}"),
            Self::InvalidIdentifier { field } => write!(f, "{field} cannot be empty"),
            Self::NoFieldsToUpdate => write!(f, "No fields to update"),
            Self::InvalidVersion(version) => {
                write!(f, "Invalid version: {version}. Must be at least 1")
            }
        }
    }
}

impl std::error::Error for DomainError {}
