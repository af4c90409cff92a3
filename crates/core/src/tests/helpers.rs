// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NewTender, new_tender};
use tender_bid_domain::{Tender, TenderEdit, TenderFields};

pub const T0: &str = "2026-03-01T09:00:00Z";
pub const T1: &str = "2026-03-02T09:00:00Z";
pub const T2: &str = "2026-03-03T09:00:00Z";

pub fn create_test_tender() -> Tender {
    new_tender(
        NewTender {
            id: String::from("tender-1"),
            fields: TenderFields::new("Road repair", "Fix potholes", "Construction"),
            organization_id: String::from("org-1"),
            creator_id: String::from("user-1"),
        },
        T0,
    )
    .unwrap()
}

pub fn rename(name: &str) -> TenderEdit {
    TenderEdit {
        name: Some(name.to_string()),
        ..TenderEdit::default()
    }
}
