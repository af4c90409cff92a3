// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee and organization provisioning.
//!
//! The HTTP surface never creates these rows. They exist for setup
//! scripts and tests.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::{MysqlConnection, SqliteConnection};
use tender_bid_domain::OrganizationType;
use tracing::info;
use uuid::Uuid;

use crate::diesel_schema::{employee, organization, organization_responsible};
use crate::error::PersistenceError;

backend_fn! {
/// Creates an employee and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails, including on a duplicate username.
pub fn create_employee(
    conn: &mut _,
    username: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<String, PersistenceError> {
    let employee_id: String = Uuid::new_v4().to_string();

    diesel::insert_into(employee::table)
        .values((
            employee::id.eq(&employee_id),
            employee::username.eq(username),
            employee::first_name.eq(first_name),
            employee::last_name.eq(last_name),
            employee::created_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
            employee::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("create_employee: {e}")))?;

    info!(employee_id, username, "Employee created");
    Ok(employee_id)
}
}

backend_fn! {
/// Creates an organization and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_organization(
    conn: &mut _,
    name: &str,
    description: &str,
    organization_type: OrganizationType,
) -> Result<String, PersistenceError> {
    let organization_id: String = Uuid::new_v4().to_string();

    diesel::insert_into(organization::table)
        .values((
            organization::id.eq(&organization_id),
            organization::name.eq(name),
            organization::description.eq(description),
            organization::organization_type.eq(organization_type.as_str()),
            organization::created_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
            organization::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("create_organization: {e}")))?;

    info!(organization_id, name, "Organization created");
    Ok(organization_id)
}
}

backend_fn! {
/// Makes an employee responsible for an organization.
///
/// # Errors
///
/// Returns an error if either side does not exist or the link already exists.
pub fn add_organization_responsible(
    conn: &mut _,
    organization_id: &str,
    user_id: &str,
) -> Result<String, PersistenceError> {
    let link_id: String = Uuid::new_v4().to_string();

    diesel::insert_into(organization_responsible::table)
        .values((
            organization_responsible::id.eq(&link_id),
            organization_responsible::organization_id.eq(organization_id),
            organization_responsible::user_id.eq(user_id),
        ))
        .execute(conn)
        .map_err(|e| {
            PersistenceError::QueryFailed(format!("add_organization_responsible: {e}"))
        })?;

    info!(organization_id, user_id, "Organization responsible added");
    Ok(link_id)
}
}
