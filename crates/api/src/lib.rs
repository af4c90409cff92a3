// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the tender/bid service.
//!
//! Every operation resolves the calling user, checks the authorization rule
//! that applies to the target resource, asks the core engine for the state
//! change and persists it. Errors from lower layers are translated into
//! [`ApiError`] explicitly; nothing below this crate leaks to callers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService, AuthorizationService};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    bids_for_tender, create_bid, create_tender, edit_tender, get_tender_status,
    list_tender_versions, list_tenders, my_bids, my_tenders, rollback_tender, set_tender_status,
    submit_decision,
};
pub use request_response::{
    BidResponse, CreateBidRequest, CreateTenderRequest, EditTenderRequest, StatusResponse,
    TenderResponse, TenderSummaryResponse, TenderVersionResponse,
};
