// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Responsibility and ownership checks.
//!
//! Each check is a row-exists query and never fails on a missing row;
//! callers decide whether `false` means forbidden or not found.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::diesel_schema::{organization_responsible, tender};
use crate::error::PersistenceError;

backend_fn! {
/// Returns whether the user is linked to the organization.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_responsible_for_organization(
    conn: &mut _,
    user_id: &str,
    organization_id: &str,
) -> Result<bool, PersistenceError> {
    let responsible: bool = diesel::select(diesel::dsl::exists(
        organization_responsible::table
            .filter(organization_responsible::organization_id.eq(organization_id))
            .filter(organization_responsible::user_id.eq(user_id)),
    ))
    .get_result::<bool>(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("is_responsible_for_organization: {e}")))?;

    debug!(user_id, organization_id, responsible, "Checked organization responsibility");
    Ok(responsible)
}
}

backend_fn! {
/// Returns whether the user is linked to the organization that owns the tender.
///
/// Returns `false` when the tender does not exist.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_responsible_for_tender(
    conn: &mut _,
    user_id: &str,
    tender_id: &str,
) -> Result<bool, PersistenceError> {
    let organization_id: Option<String> = tender::table
        .filter(tender::id.eq(tender_id))
        .select(tender::organization_id)
        .first::<String>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("is_responsible_for_tender: {e}")))?;

    let Some(organization_id) = organization_id else {
        debug!(tender_id, "Tender not found during responsibility check");
        return Ok(false);
    };

    diesel::select(diesel::dsl::exists(
        organization_responsible::table
            .filter(organization_responsible::organization_id.eq(&organization_id))
            .filter(organization_responsible::user_id.eq(user_id)),
    ))
    .get_result::<bool>(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("is_responsible_for_tender: {e}")))
}
}

backend_fn! {
/// Returns whether the user created the tender.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_tender_creator(
    conn: &mut _,
    user_id: &str,
    tender_id: &str,
) -> Result<bool, PersistenceError> {
    diesel::select(diesel::dsl::exists(
        tender::table
            .filter(tender::id.eq(tender_id))
            .filter(tender::creator_id.eq(user_id)),
    ))
    .get_result::<bool>(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("is_tender_creator: {e}")))
}
}
