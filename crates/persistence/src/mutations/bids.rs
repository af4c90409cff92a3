// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tender_bid_domain::Bid;
use tracing::info;

use crate::data_models::BidRow;
use crate::diesel_schema::bid;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new bid.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the tender or
/// author does not exist.
pub fn insert_bid(conn: &mut _, new_bid: &Bid) -> Result<(), PersistenceError> {
    diesel::insert_into(bid::table)
        .values(BidRow::from(new_bid))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_bid: {e}")))?;

    info!(
        bid_id = %new_bid.id,
        tender_id = %new_bid.tender_id,
        author_type = %new_bid.author_type,
        "Bid created"
    );
    Ok(())
}
}
