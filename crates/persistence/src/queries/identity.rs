// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::diesel_schema::employee;
use crate::error::PersistenceError;

backend_fn! {
/// Looks up the id of the employee with the given username.
///
/// Usernames are matched exactly.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee has that username.
pub fn find_employee_id_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<String>, PersistenceError> {
    debug!(username, "Resolving employee by username");

    employee::table
        .filter(employee::username.eq(username))
        .select(employee::id)
        .first::<String>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("find_employee_id_by_username: {e}")))
}
}

backend_fn! {
/// Returns whether an employee with the given id exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employee_exists(conn: &mut _, employee_id: &str) -> Result<bool, PersistenceError> {
    diesel::select(diesel::dsl::exists(
        employee::table.filter(employee::id.eq(employee_id)),
    ))
    .get_result::<bool>(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("employee_exists: {e}")))
}
}
