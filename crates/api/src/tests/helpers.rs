// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use tender_bid_domain::OrganizationType;
use tender_bid_persistence::SqlitePersistence;

use crate::{
    BidResponse, CreateBidRequest, CreateTenderRequest, TenderResponse, create_bid, create_tender,
};

/// Creator of every tender made through [`create_test_tender`].
pub const CREATOR: &str = "alice";
/// Responsible for the same organization as the creator.
pub const CO_RESPONSIBLE: &str = "carol";
/// Known employee with no organization.
pub const OUTSIDER: &str = "bob";

pub struct Fixture {
    pub organization_id: String,
    pub creator_id: String,
    pub outsider_id: String,
}

pub fn setup_test_persistence() -> (SqlitePersistence, Fixture) {
    let mut persistence: SqlitePersistence =
        SqlitePersistence::new_in_memory().expect("Failed to create persistence");

    let organization_id: String = persistence
        .create_organization("Acme", "Road works", OrganizationType::LimitedLiabilityCompany)
        .expect("Failed to create organization");
    let creator_id: String = persistence
        .create_employee(CREATOR, Some("Alice"), None)
        .expect("Failed to create creator");
    let co_responsible_id: String = persistence
        .create_employee(CO_RESPONSIBLE, None, None)
        .expect("Failed to create co-responsible");
    let outsider_id: String = persistence
        .create_employee(OUTSIDER, None, None)
        .expect("Failed to create outsider");

    persistence
        .add_organization_responsible(&organization_id, &creator_id)
        .expect("Failed to link creator");
    persistence
        .add_organization_responsible(&organization_id, &co_responsible_id)
        .expect("Failed to link co-responsible");

    (
        persistence,
        Fixture {
            organization_id,
            creator_id,
            outsider_id,
        },
    )
}

pub fn tender_request(fixture: &Fixture, name: &str) -> CreateTenderRequest {
    CreateTenderRequest {
        name: name.to_string(),
        description: String::from("Fix potholes"),
        service_type: String::from("Construction"),
        organization_id: fixture.organization_id.clone(),
        creator_username: CREATOR.to_string(),
    }
}

pub fn create_test_tender(
    persistence: &mut SqlitePersistence,
    fixture: &Fixture,
    name: &str,
) -> TenderResponse {
    create_tender(persistence, tender_request(fixture, name)).expect("Failed to create tender")
}

pub fn bid_request(tender_id: &str, author_id: &str, name: &str) -> CreateBidRequest {
    CreateBidRequest {
        name: name.to_string(),
        description: String::from("Offer"),
        tender_id: tender_id.to_string(),
        author_type: String::from("User"),
        author_id: author_id.to_string(),
    }
}

pub fn create_test_bid(
    persistence: &mut SqlitePersistence,
    tender_id: &str,
    author_id: &str,
    name: &str,
) -> BidResponse {
    create_bid(persistence, bid_request(tender_id, author_id, name))
        .expect("Failed to create bid")
}
