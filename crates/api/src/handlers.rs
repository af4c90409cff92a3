// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for tender and bid operations.
//!
//! Handlers take the store explicitly and run their checks in a fixed order:
//! resolve the caller, load the target resource, check the relationship the
//! operation requires, then validate and apply. A failed check returns before
//! anything is written.

use std::str::FromStr;
use tender_bid::{
    DecisionOutcome, NewTender, TenderCommand, TenderTransition, apply, apply_decision,
    current_timestamp, new_tender,
};
use tender_bid_domain::{
    AuthorType, Bid, BidStatus, Decision, DomainError, Pagination, Tender, TenderEdit,
    TenderFields, TenderStatus, TenderVersion, validate_description, validate_identifier,
    validate_name, validate_tender_fields,
};
use tender_bid_persistence::SqlitePersistence;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::{AuthenticatedUser, AuthenticationService, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    BidResponse, CreateBidRequest, CreateTenderRequest, EditTenderRequest, StatusResponse,
    TenderResponse, TenderSummaryResponse, TenderVersionResponse,
};

/// Version assigned to every bid. Bids are not versioned.
const BID_VERSION: i32 = 1;

/// Loads a tender or fails with `ResourceNotFound`.
fn require_tender(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
) -> Result<Tender, ApiError> {
    persistence
        .get_tender(tender_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(tender_id, "Tender not found");
            ApiError::ResourceNotFound {
                resource_type: String::from("Tender"),
                message: format!("Tender '{tender_id}' does not exist"),
            }
        })
}

fn now() -> Result<String, ApiError> {
    current_timestamp().map_err(translate_core_error)
}

/// Persists a versioned transition and returns the new live state.
fn commit_transition(
    persistence: &mut SqlitePersistence,
    transition: TenderTransition,
) -> Result<Tender, ApiError> {
    persistence
        .persist_tender_transition(&transition)
        .map_err(translate_persistence_error)?;
    Ok(transition.new_state)
}

/// Lists all tenders, optionally restricted to one service type.
///
/// An empty filter is treated as no filter.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_tenders(
    persistence: &mut SqlitePersistence,
    service_type: Option<&str>,
) -> Result<Vec<TenderSummaryResponse>, ApiError> {
    let filter: Option<&str> = service_type.filter(|s| !s.trim().is_empty());
    let tenders: Vec<Tender> = persistence
        .list_tenders(filter)
        .map_err(translate_persistence_error)?;

    debug!(count = tenders.len(), service_type = ?filter, "Listed tenders");
    Ok(tenders.iter().map(TenderSummaryResponse::from).collect())
}

/// Creates a tender owned by an organization.
///
/// # Errors
///
/// Returns an error if:
/// - Any field is invalid (`InvalidInput`)
/// - The creator username does not resolve (`AuthenticationFailed`)
/// - The creator is not responsible for the organization (`Unauthorized`)
/// - The store fails (`Internal`)
pub fn create_tender(
    persistence: &mut SqlitePersistence,
    request: CreateTenderRequest,
) -> Result<TenderResponse, ApiError> {
    let fields: TenderFields = TenderFields {
        name: request.name,
        description: request.description,
        service_type: request.service_type,
    };
    validate_tender_fields(&fields).map_err(translate_domain_error)?;
    validate_identifier("organizationId", &request.organization_id)
        .map_err(translate_domain_error)?;

    let user: AuthenticatedUser =
        AuthenticationService::resolve_user(persistence, &request.creator_username)?;
    AuthorizationService::authorize_organization(persistence, &user, &request.organization_id)?;

    let input: NewTender = NewTender {
        id: Uuid::new_v4().to_string(),
        fields,
        organization_id: request.organization_id,
        creator_id: user.user_id,
    };
    let tender: Tender = new_tender(input, &now()?).map_err(translate_core_error)?;

    persistence
        .insert_tender(&tender)
        .map_err(translate_persistence_error)?;

    info!(
        tender_id = %tender.id,
        username = %user.username,
        organization_id = %tender.organization_id,
        "Created tender"
    );
    Ok(TenderResponse::from(&tender))
}

/// Lists the tenders created by the caller.
///
/// # Errors
///
/// Returns an error if the username does not resolve or the store fails.
pub fn my_tenders(
    persistence: &mut SqlitePersistence,
    username: &str,
) -> Result<Vec<TenderSummaryResponse>, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let tenders: Vec<Tender> = persistence
        .list_tenders_by_creator(&user.user_id)
        .map_err(translate_persistence_error)?;

    debug!(username, count = tenders.len(), "Listed own tenders");
    Ok(tenders.iter().map(TenderSummaryResponse::from).collect())
}

/// Returns a tender's status. Any known user may read it.
///
/// # Errors
///
/// Returns an error if the username does not resolve or the tender is missing.
pub fn get_tender_status(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    username: &str,
) -> Result<StatusResponse, ApiError> {
    AuthenticationService::resolve_user(persistence, username)?;
    let tender: Tender = require_tender(persistence, tender_id)?;

    Ok(StatusResponse {
        status: tender.status.as_str().to_string(),
    })
}

/// Sets a tender's status. Any status may follow any other.
///
/// The status is parsed case-insensitively after the permission checks.
/// The tender's version is not changed.
///
/// # Errors
///
/// Returns an error if:
/// - The username does not resolve
/// - The tender is missing
/// - The caller is not responsible for the tender's organization
/// - The status is not one of `CREATED`, `PUBLISHED` or `CLOSED`
pub fn set_tender_status(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    status: &str,
    username: &str,
) -> Result<StatusResponse, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let tender: Tender = require_tender(persistence, tender_id)?;
    AuthorizationService::authorize_tender_management(persistence, &user, tender_id, "set_status")?;

    let status: TenderStatus = TenderStatus::from_str(status).map_err(translate_domain_error)?;
    let transition: TenderTransition =
        apply(&tender, TenderCommand::SetStatus(status), &now()?).map_err(translate_core_error)?;

    let updated: Tender = transition.new_state;
    persistence
        .update_tender_status(&updated.id, updated.status, &updated.updated_at)
        .map_err(translate_persistence_error)?;

    info!(tender_id, username, status = %updated.status, "Set tender status");
    Ok(StatusResponse {
        status: updated.status.as_str().to_string(),
    })
}

/// Edits a tender's name, description or service type.
///
/// The pre-edit fields are stored as a snapshot at the current version and
/// the version advances by one, all in one store transaction.
///
/// # Errors
///
/// Returns an error if:
/// - The username does not resolve
/// - The tender is missing
/// - The caller is not responsible for the tender's organization
/// - No field is provided or a provided field is invalid
/// - The store write fails
pub fn edit_tender(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    username: &str,
    request: EditTenderRequest,
) -> Result<TenderResponse, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let tender: Tender = require_tender(persistence, tender_id)?;
    AuthorizationService::authorize_tender_management(persistence, &user, tender_id, "edit")?;

    let edit: TenderEdit = TenderEdit {
        name: request.name,
        description: request.description,
        service_type: request.service_type,
    };
    let transition: TenderTransition =
        apply(&tender, TenderCommand::Edit(edit), &now()?).map_err(translate_core_error)?;
    let updated: Tender = commit_transition(persistence, transition)?;

    info!(tender_id, username, version = updated.version, "Edited tender");
    Ok(TenderResponse::from(&updated))
}

/// Restores a tender's fields from a stored snapshot.
///
/// The version still advances by one; the fields being replaced are
/// snapshotted first, so the rollback itself can be rolled back.
///
/// # Errors
///
/// Returns an error if:
/// - The version is below 1
/// - The username does not resolve
/// - The tender or the snapshot is missing
/// - The caller is not responsible for the tender's organization
/// - The store write fails
pub fn rollback_tender(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    version: i32,
    username: &str,
) -> Result<TenderResponse, ApiError> {
    if version < 1 {
        return Err(translate_domain_error(DomainError::InvalidVersion(version)));
    }

    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let tender: Tender = require_tender(persistence, tender_id)?;
    AuthorizationService::authorize_tender_management(persistence, &user, tender_id, "rollback")?;

    let target: TenderVersion = persistence
        .get_tender_version(tender_id, version)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(tender_id, version, "Tender version not found");
            ApiError::ResourceNotFound {
                resource_type: String::from("TenderVersion"),
                message: format!("Tender '{tender_id}' has no version {version}"),
            }
        })?;

    let transition: TenderTransition =
        apply(&tender, TenderCommand::Rollback { target }, &now()?)
            .map_err(translate_core_error)?;
    let updated: Tender = commit_transition(persistence, transition)?;

    info!(
        tender_id,
        username,
        target_version = version,
        version = updated.version,
        "Rolled back tender"
    );
    Ok(TenderResponse::from(&updated))
}

/// Lists the stored snapshots of a tender, oldest first.
///
/// # Errors
///
/// Returns an error if the username does not resolve, the tender is missing,
/// or the caller is not responsible for the tender's organization.
pub fn list_tender_versions(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    username: &str,
) -> Result<Vec<TenderVersionResponse>, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    require_tender(persistence, tender_id)?;
    AuthorizationService::authorize_tender_management(
        persistence,
        &user,
        tender_id,
        "list_versions",
    )?;

    let versions: Vec<TenderVersion> = persistence
        .list_tender_versions(tender_id)
        .map_err(translate_persistence_error)?;

    debug!(tender_id, count = versions.len(), "Listed tender versions");
    Ok(versions
        .into_iter()
        .map(TenderVersionResponse::from)
        .collect())
}

/// Creates a bid against a tender.
///
/// # Errors
///
/// Returns an error if:
/// - A field or the author type is invalid (`InvalidInput`)
/// - The author is not an existing employee (`AuthenticationFailed`)
/// - The tender is missing (`ResourceNotFound`)
/// - The store fails (`Internal`)
pub fn create_bid(
    persistence: &mut SqlitePersistence,
    request: CreateBidRequest,
) -> Result<BidResponse, ApiError> {
    validate_name(&request.name).map_err(translate_domain_error)?;
    validate_description(&request.description).map_err(translate_domain_error)?;
    validate_identifier("tenderId", &request.tender_id).map_err(translate_domain_error)?;
    validate_identifier("authorId", &request.author_id).map_err(translate_domain_error)?;
    let author_type: AuthorType =
        AuthorType::from_str(&request.author_type).map_err(translate_domain_error)?;

    AuthenticationService::require_employee(persistence, &request.author_id)?;
    require_tender(persistence, &request.tender_id)?;

    let bid: Bid = Bid {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        description: request.description,
        status: BidStatus::Created,
        tender_id: request.tender_id,
        author_type,
        author_id: request.author_id,
        version: BID_VERSION,
        created_at: now()?,
    };
    persistence
        .insert_bid(&bid)
        .map_err(translate_persistence_error)?;

    info!(
        bid_id = %bid.id,
        tender_id = %bid.tender_id,
        author_id = %bid.author_id,
        "Created bid"
    );
    Ok(BidResponse::from(bid))
}

/// Lists the bids authored by the caller, ordered by name.
///
/// # Errors
///
/// Returns an error if the username does not resolve or the store fails.
pub fn my_bids(
    persistence: &mut SqlitePersistence,
    username: &str,
    page: Pagination,
) -> Result<Vec<BidResponse>, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let bids: Vec<Bid> = persistence
        .list_bids_by_author(&user.user_id, page)
        .map_err(translate_persistence_error)?;

    debug!(username, count = bids.len(), "Listed own bids");
    Ok(bids.into_iter().map(BidResponse::from).collect())
}

/// Lists the bids placed against a tender, ordered by name.
///
/// # Errors
///
/// Returns an error if the username does not resolve, the tender is missing,
/// or the caller is not responsible for the tender's organization.
pub fn bids_for_tender(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    username: &str,
    page: Pagination,
) -> Result<Vec<BidResponse>, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    require_tender(persistence, tender_id)?;
    AuthorizationService::authorize_tender_management(persistence, &user, tender_id, "list_bids")?;

    let bids: Vec<Bid> = persistence
        .list_bids_for_tender(tender_id, page)
        .map_err(translate_persistence_error)?;

    debug!(tender_id, count = bids.len(), "Listed tender bids");
    Ok(bids.into_iter().map(BidResponse::from).collect())
}

/// Records the tender creator's decision on a bid.
///
/// Approval closes the bid's tender; approving again leaves it closed.
/// Rejection writes nothing. The bid itself is returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The username does not resolve
/// - The decision is not `Approved` or `Rejected`
/// - The bid is missing
/// - The caller did not create the bid's tender
/// - The store write fails
pub fn submit_decision(
    persistence: &mut SqlitePersistence,
    bid_id: &str,
    decision: &str,
    username: &str,
) -> Result<BidResponse, ApiError> {
    let user: AuthenticatedUser = AuthenticationService::resolve_user(persistence, username)?;
    let decision: Decision = Decision::from_str(decision).map_err(translate_domain_error)?;

    let bid: Bid = persistence
        .get_bid(bid_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            warn!(bid_id, "Bid not found");
            ApiError::ResourceNotFound {
                resource_type: String::from("Bid"),
                message: format!("Bid '{bid_id}' does not exist"),
            }
        })?;
    AuthorizationService::authorize_tender_decision(persistence, &user, &bid.tender_id)?;

    let outcome: DecisionOutcome = apply_decision(decision);
    if let Some(status) = outcome.tender_status {
        let tender: Tender = require_tender(persistence, &bid.tender_id)?;
        let transition: TenderTransition =
            apply(&tender, TenderCommand::SetStatus(status), &now()?)
                .map_err(translate_core_error)?;
        let updated: Tender = transition.new_state;
        persistence
            .update_tender_status(&updated.id, updated.status, &updated.updated_at)
            .map_err(translate_persistence_error)?;
    }

    info!(
        bid_id,
        tender_id = %bid.tender_id,
        username,
        decision = decision.as_str(),
        "Submitted decision"
    );
    Ok(BidResponse::from(bid))
}
