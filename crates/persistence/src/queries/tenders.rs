// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tender_bid_domain::{Tender, TenderVersion};
use tracing::debug;

use crate::data_models::{TenderRow, TenderVersionRow};
use crate::diesel_schema::{tender, tender_version};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a tender by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
/// Returns `Ok(None)` if the tender does not exist.
pub fn get_tender(conn: &mut _, tender_id: &str) -> Result<Option<Tender>, PersistenceError> {
    debug!(tender_id, "Fetching tender");

    let row: Option<TenderRow> = tender::table
        .filter(tender::id.eq(tender_id))
        .select(TenderRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_tender: {e}")))?;

    row.map(Tender::try_from).transpose()
}
}

backend_fn! {
/// Lists tenders ordered by name, optionally restricted to one service type.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_tenders(
    conn: &mut _,
    service_type: Option<&str>,
) -> Result<Vec<Tender>, PersistenceError> {
    let mut query = tender::table.select(TenderRow::as_select()).into_boxed();
    if let Some(service_type) = service_type {
        query = query.filter(tender::service_type.eq(service_type));
    }

    let rows: Vec<TenderRow> = query
        .order((tender::name.asc(), tender::id.asc()))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_tenders: {e}")))?;

    debug!(count = rows.len(), ?service_type, "Listed tenders");
    rows.into_iter().map(Tender::try_from).collect()
}
}

backend_fn! {
/// Lists the tenders created by an employee, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_tenders_by_creator(
    conn: &mut _,
    creator_id: &str,
) -> Result<Vec<Tender>, PersistenceError> {
    let rows: Vec<TenderRow> = tender::table
        .filter(tender::creator_id.eq(creator_id))
        .select(TenderRow::as_select())
        .order((tender::name.asc(), tender::id.asc()))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_tenders_by_creator: {e}")))?;

    rows.into_iter().map(Tender::try_from).collect()
}
}

backend_fn! {
/// Retrieves the snapshot of a tender at a given version.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no snapshot exists for that version.
pub fn get_tender_version(
    conn: &mut _,
    tender_id: &str,
    version: i32,
) -> Result<Option<TenderVersion>, PersistenceError> {
    debug!(tender_id, version, "Fetching tender snapshot");

    tender_version::table
        .filter(tender_version::tender_id.eq(tender_id))
        .filter(tender_version::version.eq(version))
        .select(TenderVersionRow::as_select())
        .first(conn)
        .optional()
        .map(|row| row.map(TenderVersion::from))
        .map_err(|e| PersistenceError::QueryFailed(format!("get_tender_version: {e}")))
}
}

backend_fn! {
/// Lists every snapshot of a tender in ascending version order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_tender_versions(
    conn: &mut _,
    tender_id: &str,
) -> Result<Vec<TenderVersion>, PersistenceError> {
    let rows: Vec<TenderVersionRow> = tender_version::table
        .filter(tender_version::tender_id.eq(tender_id))
        .select(TenderVersionRow::as_select())
        .order(tender_version::version.asc())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_tender_versions: {e}")))?;

    Ok(rows.into_iter().map(TenderVersion::from).collect())
}
}
