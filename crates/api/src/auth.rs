// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity resolution and authorization checks.
//!
//! Usernames are trusted bearer identities: resolving one only proves that an
//! employee row with that name exists. Authorization is relationship based.
//! Organization responsibles manage the organization's tenders, and only a
//! tender's creator may decide on its bids.

use tender_bid_persistence::SqlitePersistence;
use tracing::{debug, warn};

use crate::error::{ApiError, AuthError, translate_persistence_error};

/// A caller resolved to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The employee id.
    pub user_id: String,
    /// The username the caller presented.
    pub username: String,
}

/// Resolves usernames to employees.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Resolves a username to the employee it names.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the username is empty or unknown, and
    /// `Internal` if the lookup fails.
    pub fn resolve_user(
        persistence: &mut SqlitePersistence,
        username: &str,
    ) -> Result<AuthenticatedUser, ApiError> {
        if username.trim().is_empty() {
            warn!("Request without username");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Username is required"),
            }
            .into());
        }

        let user_id: String = persistence
            .find_employee_id_by_username(username)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| {
                warn!(username, "Unknown user");
                AuthError::AuthenticationFailed {
                    reason: format!("User '{username}' does not exist"),
                }
            })?;

        debug!(username, user_id = %user_id, "Resolved user");
        Ok(AuthenticatedUser {
            user_id,
            username: username.to_string(),
        })
    }

    /// Requires that an employee with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if no such employee exists.
    pub fn require_employee(
        persistence: &mut SqlitePersistence,
        employee_id: &str,
    ) -> Result<(), ApiError> {
        let exists: bool = persistence
            .employee_exists(employee_id)
            .map_err(translate_persistence_error)?;
        if !exists {
            warn!(author_id = employee_id, "Unknown bid author");
            return Err(AuthError::AuthenticationFailed {
                reason: format!("Employee '{employee_id}' does not exist"),
            }
            .into());
        }
        Ok(())
    }
}

/// Relationship checks guarding each mutation.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Authorizes creating a tender on behalf of an organization.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the user is not responsible for the organization.
    pub fn authorize_organization(
        persistence: &mut SqlitePersistence,
        user: &AuthenticatedUser,
        organization_id: &str,
    ) -> Result<(), ApiError> {
        let responsible: bool = persistence
            .is_responsible_for_organization(&user.user_id, organization_id)
            .map_err(translate_persistence_error)?;
        if !responsible {
            warn!(
                username = %user.username,
                organization_id,
                "User is not responsible for organization"
            );
            return Err(AuthError::Unauthorized {
                action: String::from("create_tender"),
                requirement: String::from("organization responsibility"),
            }
            .into());
        }
        Ok(())
    }

    /// Authorizes managing a tender: status changes, edits, rollback and
    /// reading its versions or bids.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the user is not responsible for the
    /// organization owning the tender.
    pub fn authorize_tender_management(
        persistence: &mut SqlitePersistence,
        user: &AuthenticatedUser,
        tender_id: &str,
        action: &str,
    ) -> Result<(), ApiError> {
        let responsible: bool = persistence
            .is_responsible_for_tender(&user.user_id, tender_id)
            .map_err(translate_persistence_error)?;
        if !responsible {
            warn!(
                username = %user.username,
                tender_id,
                action,
                "User is not responsible for tender"
            );
            return Err(AuthError::Unauthorized {
                action: action.to_string(),
                requirement: String::from("organization responsibility"),
            }
            .into());
        }
        Ok(())
    }

    /// Authorizes a decision on a bid placed against the tender.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the user did not create the tender.
    pub fn authorize_tender_decision(
        persistence: &mut SqlitePersistence,
        user: &AuthenticatedUser,
        tender_id: &str,
    ) -> Result<(), ApiError> {
        let creator: bool = persistence
            .is_tender_creator(&user.user_id, tender_id)
            .map_err(translate_persistence_error)?;
        if !creator {
            warn!(
                username = %user.username,
                tender_id,
                "User is not the tender creator"
            );
            return Err(AuthError::Unauthorized {
                action: String::from("submit_decision"),
                requirement: String::from("tender creator"),
            }
            .into());
        }
        Ok(())
    }
}
