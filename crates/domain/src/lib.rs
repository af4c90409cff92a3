// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod pagination;
mod records;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, Pagination};
pub use records::{Bid, Tender, TenderEdit, TenderFields, TenderVersion};
pub use types::{AuthorType, BidStatus, Decision, OrganizationType, TenderStatus};
pub use validation::{
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, validate_description, validate_identifier,
    validate_name, validate_service_type, validate_tender_edit, validate_tender_fields,
};
