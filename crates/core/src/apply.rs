// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::TenderCommand;
use crate::error::CoreError;
use crate::state::{DecisionOutcome, NewTender, TenderTransition};
use tender_bid_domain::{
    Decision, Tender, TenderFields, TenderStatus, validate_identifier, validate_tender_edit,
    validate_tender_fields,
};

/// Version assigned to every newly created tender.
const INITIAL_VERSION: i32 = 1;

/// Builds the initial state of a tender.
///
/// # Errors
///
/// Returns an error if any field fails validation or the organization id is blank.
pub fn new_tender(input: NewTender, now: &str) -> Result<Tender, CoreError> {
    validate_tender_fields(&input.fields)?;
    validate_identifier("organizationId", &input.organization_id)?;

    let TenderFields {
        name,
        description,
        service_type,
    } = input.fields;

    Ok(Tender {
        id: input.id,
        name,
        description,
        service_type,
        organization_id: input.organization_id,
        creator_id: input.creator_id,
        status: TenderStatus::Created,
        version: INITIAL_VERSION,
        created_at: now.to_string(),
        updated_at: now.to_string(),
    })
}

/// Applies a command to a tender, producing the new state.
///
/// This function is pure: it takes the current tender by reference and
/// returns the state to persist. Edit and rollback snapshot the fields being
/// superseded at the current version and advance the version by exactly one.
/// Status changes are not versioned.
///
/// # Arguments
///
/// * `tender` - The current live tender
/// * `command` - The change to apply
/// * `now` - Timestamp stamped on the snapshot and `updated_at`
///
/// # Errors
///
/// Returns an error if:
/// - An edit carries no fields or an invalid field
/// - A rollback target was taken from another tender
/// - The version counter would overflow
pub fn apply(
    tender: &Tender,
    command: TenderCommand,
    now: &str,
) -> Result<TenderTransition, CoreError> {
    match command {
        TenderCommand::Edit(edit) => {
            validate_tender_edit(&edit)?;
            let fields: TenderFields = edit.apply_to(&tender.fields());
            versioned_transition(tender, fields, now)
        }
        TenderCommand::Rollback { target } => {
            if target.tender_id != tender.id {
                return Err(CoreError::SnapshotMismatch {
                    tender_id: tender.id.clone(),
                    snapshot_tender_id: target.tender_id,
                });
            }
            versioned_transition(tender, target.fields(), now)
        }
        TenderCommand::SetStatus(status) => {
            let mut new_state: Tender = tender.clone();
            new_state.status = status;
            new_state.updated_at = now.to_string();
            Ok(TenderTransition {
                snapshot: None,
                new_state,
            })
        }
    }
}

fn versioned_transition(
    tender: &Tender,
    fields: TenderFields,
    now: &str,
) -> Result<TenderTransition, CoreError> {
    let next_version: i32 = tender
        .version
        .checked_add(1)
        .ok_or(CoreError::VersionOverflow(tender.version))?;

    let TenderFields {
        name,
        description,
        service_type,
    } = fields;

    let new_state: Tender = Tender {
        name,
        description,
        service_type,
        version: next_version,
        updated_at: now.to_string(),
        ..tender.clone()
    };

    Ok(TenderTransition {
        snapshot: Some(tender.snapshot(now)),
        new_state,
    })
}

/// Determines the effect of a decision on the bid's tender.
///
/// Approval closes the tender; repeating it is an idempotent close.
/// Rejection changes nothing. The bid's own status is left as is.
#[must_use]
pub const fn apply_decision(decision: Decision) -> DecisionOutcome {
    match decision {
        Decision::Approved => DecisionOutcome {
            tender_status: Some(TenderStatus::Closed),
        },
        Decision::Rejected => DecisionOutcome {
            tender_status: None,
        },
    }
}
