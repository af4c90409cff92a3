// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tender_bid::TenderTransition;
use tender_bid_domain::{Tender, TenderStatus};
use tracing::{debug, info};

use crate::data_models::{TenderRow, TenderVersionRow};
use crate::diesel_schema::{tender, tender_version};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new tender.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the organization or
/// creator does not exist.
pub fn insert_tender(conn: &mut _, new_tender: &Tender) -> Result<(), PersistenceError> {
    diesel::insert_into(tender::table)
        .values(TenderRow::from(new_tender))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_tender: {e}")))?;

    info!(
        tender_id = %new_tender.id,
        organization_id = %new_tender.organization_id,
        "Tender created"
    );
    Ok(())
}
}

backend_fn! {
/// Persists a tender transition atomically.
///
/// The snapshot (if any) is inserted and the live row overwritten in one
/// transaction. A snapshot that already exists for `(tender_id, version)`
/// makes the whole transition fail; this is what a concurrent writer that
/// read the same version runs into.
///
/// # Errors
///
/// Returns an error if either statement fails or the live row is gone.
pub fn persist_tender_transition(
    conn: &mut _,
    transition: &TenderTransition,
) -> Result<(), PersistenceError> {
    let new_state: &Tender = &transition.new_state;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if let Some(snapshot) = &transition.snapshot {
            diesel::insert_into(tender_version::table)
                .values(TenderVersionRow::from(snapshot))
                .execute(conn)
                .map_err(|e| {
                    PersistenceError::QueryFailed(format!("persist_tender_transition: {e}"))
                })?;
            debug!(tender_id = %snapshot.tender_id, version = snapshot.version, "Stored snapshot");
        }

        let updated: usize = diesel::update(tender::table.filter(tender::id.eq(&new_state.id)))
            .set((
                tender::name.eq(&new_state.name),
                tender::description.eq(&new_state.description),
                tender::service_type.eq(&new_state.service_type),
                tender::status.eq(new_state.status.as_str()),
                tender::version.eq(new_state.version),
                tender::updated_at.eq(&new_state.updated_at),
            ))
            .execute(conn)
            .map_err(|e| {
                PersistenceError::QueryFailed(format!("persist_tender_transition: {e}"))
            })?;

        if updated == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Tender {} not found",
                new_state.id
            )));
        }
        Ok(())
    })?;

    info!(
        tender_id = %new_state.id,
        version = new_state.version,
        status = %new_state.status,
        "Tender transition persisted"
    );
    Ok(())
}
}

backend_fn! {
/// Writes a tender's status without touching its version.
///
/// # Errors
///
/// Returns an error if the update fails or the tender does not exist.
pub fn update_tender_status(
    conn: &mut _,
    tender_id: &str,
    status: TenderStatus,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(tender::table.filter(tender::id.eq(tender_id)))
        .set((
            tender::status.eq(status.as_str()),
            tender::updated_at.eq(updated_at),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("update_tender_status: {e}")))?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Tender {tender_id} not found"
        )));
    }

    info!(tender_id, %status, "Tender status updated");
    Ok(())
}
}
