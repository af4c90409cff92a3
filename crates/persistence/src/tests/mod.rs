// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::SqlitePersistence;
use tender_bid::{NewTender, new_tender};
use tender_bid_domain::{
    AuthorType, Bid, BidStatus, OrganizationType, Tender, TenderFields,
};

pub const NOW: &str = "2026-03-01T09:00:00Z";

/// Ids of the rows created by [`seed`].
pub struct Fixture {
    pub organization_id: String,
    pub responsible_id: String,
    pub outsider_id: String,
}

/// One organization, one responsible employee and one unrelated employee.
pub fn seed(persistence: &mut SqlitePersistence) -> Fixture {
    let organization_id: String = persistence
        .create_organization("Acme", "Roads and bridges", OrganizationType::LimitedLiabilityCompany)
        .unwrap();
    let responsible_id: String = persistence
        .create_employee("alice", Some("Alice"), Some("Smith"))
        .unwrap();
    let outsider_id: String = persistence.create_employee("bob", None, None).unwrap();
    persistence
        .add_organization_responsible(&organization_id, &responsible_id)
        .unwrap();

    Fixture {
        organization_id,
        responsible_id,
        outsider_id,
    }
}

pub fn create_test_tender(
    persistence: &mut SqlitePersistence,
    fixture: &Fixture,
    id: &str,
    name: &str,
    service_type: &str,
) -> Tender {
    let tender: Tender = new_tender(
        NewTender {
            id: id.to_string(),
            fields: TenderFields::new(name, "Description", service_type),
            organization_id: fixture.organization_id.clone(),
            creator_id: fixture.responsible_id.clone(),
        },
        NOW,
    )
    .unwrap();
    persistence.insert_tender(&tender).unwrap();
    tender
}

pub fn create_test_bid(
    persistence: &mut SqlitePersistence,
    id: &str,
    name: &str,
    tender_id: &str,
    author_id: &str,
) -> Bid {
    let bid: Bid = Bid {
        id: id.to_string(),
        name: name.to_string(),
        description: String::from("Proposal"),
        status: BidStatus::Created,
        tender_id: tender_id.to_string(),
        author_type: AuthorType::User,
        author_id: author_id.to_string(),
        version: 1,
        created_at: NOW.to_string(),
    };
    persistence.insert_bid(&bid).unwrap();
    bid
}
