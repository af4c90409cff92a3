// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tender_bid_domain::{Bid, Pagination};
use tracing::debug;

use crate::data_models::BidRow;
use crate::diesel_schema::bid;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a bid by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
/// Returns `Ok(None)` if the bid does not exist.
pub fn get_bid(conn: &mut _, bid_id: &str) -> Result<Option<Bid>, PersistenceError> {
    let row: Option<BidRow> = bid::table
        .filter(bid::id.eq(bid_id))
        .select(BidRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_bid: {e}")))?;

    row.map(Bid::try_from).transpose()
}
}

backend_fn! {
/// Lists one page of the bids authored by an employee, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_bids_by_author(
    conn: &mut _,
    author_id: &str,
    page: Pagination,
) -> Result<Vec<Bid>, PersistenceError> {
    let rows: Vec<BidRow> = bid::table
        .filter(bid::author_id.eq(author_id))
        .select(BidRow::as_select())
        .order((bid::name.asc(), bid::id.asc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_bids_by_author: {e}")))?;

    debug!(author_id, count = rows.len(), "Listed bids by author");
    rows.into_iter().map(Bid::try_from).collect()
}
}

backend_fn! {
/// Lists one page of the bids placed on a tender, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_bids_for_tender(
    conn: &mut _,
    tender_id: &str,
    page: Pagination,
) -> Result<Vec<Bid>, PersistenceError> {
    let rows: Vec<BidRow> = bid::table
        .filter(bid::tender_id.eq(tender_id))
        .select(BidRow::as_select())
        .order((bid::name.asc(), bid::id.asc()))
        .limit(page.limit())
        .offset(page.offset())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_bids_for_tender: {e}")))?;

    debug!(tender_id, count = rows.len(), "Listed bids for tender");
    rows.into_iter().map(Bid::try_from).collect()
}
}
