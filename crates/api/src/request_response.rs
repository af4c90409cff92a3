// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Keys are camelCase on the wire. Request bodies default missing fields to
//! empty values so that validation, not deserialization, rejects them.

use serde::{Deserialize, Serialize};
use tender_bid_domain::{Bid, Tender, TenderVersion};

/// API request to create a tender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTenderRequest {
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub organization_id: String,
    pub creator_username: String,
}

/// API request to edit a tender. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditTenderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub service_type: Option<String>,
}

/// API request to create a bid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBidRequest {
    pub name: String,
    pub description: String,
    pub tender_id: String,
    /// `Organization` or `User`.
    pub author_type: String,
    pub author_id: String,
}

/// Full tender projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub status: String,
    pub organization_id: String,
    pub version: i32,
    pub created_at: String,
}

impl From<&Tender> for TenderResponse {
    fn from(tender: &Tender) -> Self {
        Self {
            id: tender.id.clone(),
            name: tender.name.clone(),
            description: tender.description.clone(),
            service_type: tender.service_type.clone(),
            status: tender.status.as_str().to_string(),
            organization_id: tender.organization_id.clone(),
            version: tender.version,
            created_at: tender.created_at.clone(),
        }
    }
}

/// Tender projection used in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderSummaryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub status: String,
    pub version: i32,
}

impl From<&Tender> for TenderSummaryResponse {
    fn from(tender: &Tender) -> Self {
        Self {
            id: tender.id.clone(),
            name: tender.name.clone(),
            description: tender.description.clone(),
            service_type: tender.service_type.clone(),
            status: tender.status.as_str().to_string(),
            version: tender.version,
        }
    }
}

/// A tender's current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// A stored snapshot of a tender's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderVersionResponse {
    pub tender_id: String,
    pub version: i32,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub created_at: String,
}

impl From<TenderVersion> for TenderVersionResponse {
    fn from(snapshot: TenderVersion) -> Self {
        Self {
            tender_id: snapshot.tender_id,
            version: snapshot.version,
            name: snapshot.name,
            description: snapshot.description,
            service_type: snapshot.service_type,
            created_at: snapshot.created_at,
        }
    }
}

/// Bid projection, used both for single bids and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub tender_id: String,
    pub author_type: String,
    pub author_id: String,
    pub version: i32,
    pub created_at: String,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            name: bid.name,
            description: bid.description,
            status: bid.status.as_str().to_string(),
            tender_id: bid.tender_id,
            author_type: bid.author_type.as_str().to_string(),
            author_id: bid.author_id,
            version: bid.version,
            created_at: bid.created_at,
        }
    }
}
