// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversions to domain records.

use diesel::prelude::*;
use std::str::FromStr;
use tender_bid_domain::{AuthorType, Bid, BidStatus, Tender, TenderStatus, TenderVersion};

use crate::diesel_schema::{bid, tender, tender_version};
use crate::error::PersistenceError;

/// A stored tender row.
#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = tender)]
pub struct TenderRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub organization_id: String,
    pub creator_id: String,
    pub status: String,
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// A stored tender snapshot row.
#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = tender_version)]
pub struct TenderVersionRow {
    pub tender_id: String,
    pub version: i32,
    pub name: String,
    pub description: String,
    pub service_type: String,
    pub created_at: String,
}

/// A stored bid row.
#[derive(Queryable, Selectable, Insertable)]
#[diesel(table_name = bid)]
pub struct BidRow {
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

impl TryFrom<TenderRow> for Tender {
    type Error = PersistenceError;

    fn try_from(row: TenderRow) -> Result<Self, Self::Error> {
        let status: TenderStatus = TenderStatus::from_str(&row.status).map_err(|e| {
            PersistenceError::ReconstructionError(format!("tender {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            service_type: row.service_type,
            organization_id: row.organization_id,
            creator_id: row.creator_id,
            status,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<&Tender> for TenderRow {
    fn from(tender: &Tender) -> Self {
        Self {
            id: tender.id.clone(),
            name: tender.name.clone(),
            description: tender.description.clone(),
            service_type: tender.service_type.clone(),
            organization_id: tender.organization_id.clone(),
            creator_id: tender.creator_id.clone(),
            status: tender.status.as_str().to_string(),
            version: tender.version,
            created_at: tender.created_at.clone(),
            updated_at: tender.updated_at.clone(),
        }
    }
}

impl From<TenderVersionRow> for TenderVersion {
    fn from(row: TenderVersionRow) -> Self {
        Self {
            tender_id: row.tender_id,
            version: row.version,
            name: row.name,
            description: row.description,
            service_type: row.service_type,
            created_at: row.created_at,
        }
    }
}

impl From<&TenderVersion> for TenderVersionRow {
    fn from(snapshot: &TenderVersion) -> Self {
        Self {
            tender_id: snapshot.tender_id.clone(),
            version: snapshot.version,
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            service_type: snapshot.service_type.clone(),
            created_at: snapshot.created_at.clone(),
        }
    }
}

impl TryFrom<BidRow> for Bid {
    type Error = PersistenceError;

    fn try_from(row: BidRow) -> Result<Self, Self::Error> {
        let status: BidStatus = BidStatus::from_str(&row.status)
            .map_err(|e| PersistenceError::ReconstructionError(format!("bid {}: {e}", row.id)))?;
        let author_type: AuthorType = AuthorType::from_str(&row.author_type)
            .map_err(|e| PersistenceError::ReconstructionError(format!("bid {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            status,
            tender_id: row.tender_id,
            author_type,
            author_id: row.author_id,
            version: row.version,
            created_at: row.created_at,
        })
    }
}

impl From<&Bid> for BidRow {
    fn from(bid: &Bid) -> Self {
        Self {
            id: bid.id.clone(),
            name: bid.name.clone(),
            description: bid.description.clone(),
            status: bid.status.as_str().to_string(),
            tender_id: bid.tender_id.clone(),
            author_type: bid.author_type.as_str().to_string(),
            author_id: bid.author_id.clone(),
            version: bid.version,
            created_at: bid.created_at.clone(),
        }
    }
}
