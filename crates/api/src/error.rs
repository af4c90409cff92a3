// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tender_bid::CoreError;
use tender_bid_domain::DomainError;
use tender_bid_persistence::PersistenceError;
use tracing::error;

/// Identity and permission failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The caller could not be resolved to an employee.
    AuthenticationFailed {
        /// The reason resolution failed.
        reason: String,
    },
    /// The caller is known but lacks the relationship the action requires.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The relationship required for this action.
        requirement: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                requirement,
            } => {
                write!(f, "Forbidden: '{action}' requires {requirement}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Each variant corresponds to one HTTP status class at the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller is unknown or missing.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller is known but not permitted to act on the resource.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The relationship required for this action.
        requirement: String,
    },
    /// Input validation failed.
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
    /// A referenced resource does not exist.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A description of what was not found.
        message: String,
    },
    /// Store or engine failure not caused by the caller.
    Internal {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                requirement,
            } => {
                write!(f, "Forbidden: '{action}' requires {requirement}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                requirement,
            } => Self::Unauthorized {
                action,
                requirement,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is a rejected input; the field name is the camelCase
/// key the caller sent.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidTenderStatus(_) | DomainError::InvalidBidStatus(_) => "status",
        DomainError::InvalidDecision(_) => "decision",
        DomainError::InvalidAuthorType(_) => "authorType",
        DomainError::InvalidOrganizationType(_) => "organizationType",
        DomainError::InvalidName(_) => "name",
        DomainError::InvalidDescription(_) => "description",
        DomainError::InvalidServiceType(_) => "serviceType",
        DomainError::InvalidIdentifier { field } => *field,
        DomainError::NoFieldsToUpdate => "body",
        DomainError::InvalidVersion(_) => "version",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SnapshotMismatch { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("TenderVersion"),
            message: err.to_string(),
        },
        CoreError::VersionOverflow(_) | CoreError::Internal(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a store failure into an internal API error.
///
/// The failure is logged here; callers only see that the store failed.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    error!(error = %err, "Store operation failed");
    ApiError::Internal {
        message: format!("Store operation failed: {err}"),
    }
}
