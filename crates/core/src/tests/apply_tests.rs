// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{T0, T1, create_test_tender, rename};
use crate::{CoreError, NewTender, TenderCommand, TenderTransition, apply, new_tender};
use tender_bid_domain::{
    DomainError, Tender, TenderEdit, TenderFields, TenderStatus, TenderVersion,
};

#[test]
fn test_new_tender_starts_created_at_version_one() {
    let tender: Tender = create_test_tender();
    assert_eq!(tender.status, TenderStatus::Created);
    assert_eq!(tender.version, 1);
    assert_eq!(tender.created_at, T0);
    assert_eq!(tender.updated_at, T0);
}

#[test]
fn test_new_tender_rejects_invalid_fields() {
    let result: Result<Tender, CoreError> = new_tender(
        NewTender {
            id: String::from("tender-2"),
            fields: TenderFields::new(&"x".repeat(101), "", "Delivery"),
            organization_id: String::from("org-1"),
            creator_id: String::from("user-1"),
        },
        T0,
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_new_tender_rejects_blank_organization() {
    let result: Result<Tender, CoreError> = new_tender(
        NewTender {
            id: String::from("tender-2"),
            fields: TenderFields::new("Name", "", "Delivery"),
            organization_id: String::new(),
            creator_id: String::from("user-1"),
        },
        T0,
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidIdentifier { .. }
        ))
    ));
}

#[test]
fn test_edit_snapshots_pre_edit_fields_at_current_version() {
    let tender: Tender = create_test_tender();

    let transition: TenderTransition =
        apply(&tender, TenderCommand::Edit(rename("Bridge repair")), T1).unwrap();

    let snapshot: TenderVersion = transition.snapshot.unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.name, "Road repair");
    assert_eq!(snapshot.created_at, T1);

    assert_eq!(transition.new_state.version, 2);
    assert_eq!(transition.new_state.name, "Bridge repair");
    assert_eq!(transition.new_state.description, "Fix potholes");
    assert_eq!(transition.new_state.updated_at, T1);
    assert_eq!(transition.new_state.created_at, T0);
}

#[test]
fn test_edit_without_fields_is_rejected() {
    let tender: Tender = create_test_tender();
    let result = apply(&tender, TenderCommand::Edit(TenderEdit::default()), T1);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoFieldsToUpdate))
    );
}

#[test]
fn test_edit_with_invalid_description_is_rejected() {
    let tender: Tender = create_test_tender();
    let edit: TenderEdit = TenderEdit {
        description: Some("d".repeat(501)),
        ..TenderEdit::default()
    };
    let result = apply(&tender, TenderCommand::Edit(edit), T1);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidDescription(_)
        ))
    ));
}

#[test]
fn test_edit_does_not_touch_status() {
    let mut tender: Tender = create_test_tender();
    tender.status = TenderStatus::Published;
    let transition = apply(&tender, TenderCommand::Edit(rename("Other")), T1).unwrap();
    assert_eq!(transition.new_state.status, TenderStatus::Published);
}

#[test]
fn test_rollback_rejects_snapshot_from_other_tender() {
    let tender: Tender = create_test_tender();
    let mut target: TenderVersion = tender.snapshot(T0);
    target.tender_id = String::from("tender-9");

    let result = apply(&tender, TenderCommand::Rollback { target }, T1);
    assert!(matches!(result, Err(CoreError::SnapshotMismatch { .. })));
}

#[test]
fn test_version_overflow_is_reported() {
    let mut tender: Tender = create_test_tender();
    tender.version = i32::MAX;
    let result = apply(&tender, TenderCommand::Edit(rename("Other")), T1);
    assert_eq!(result, Err(CoreError::VersionOverflow(i32::MAX)));
}

#[test]
fn test_set_status_is_unversioned() {
    let tender: Tender = create_test_tender();
    let transition = apply(
        &tender,
        TenderCommand::SetStatus(TenderStatus::Published),
        T1,
    )
    .unwrap();
    assert!(transition.snapshot.is_none());
    assert_eq!(transition.new_state.version, 1);
    assert_eq!(transition.new_state.status, TenderStatus::Published);
}

#[test]
fn test_set_status_allows_reopening_closed_tender() {
    let mut tender: Tender = create_test_tender();
    tender.status = TenderStatus::Closed;
    let transition = apply(
        &tender,
        TenderCommand::SetStatus(TenderStatus::Created),
        T1,
    )
    .unwrap();
    assert_eq!(transition.new_state.status, TenderStatus::Created);
}

#[test]
fn test_command_names() {
    assert_eq!(TenderCommand::Edit(TenderEdit::default()).name(), "Edit");
    assert_eq!(
        TenderCommand::SetStatus(TenderStatus::Closed).name(),
        "SetStatus"
    );
}
