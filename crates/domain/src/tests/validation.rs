// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, TenderEdit, TenderFields,
    validate_description, validate_identifier, validate_name, validate_service_type,
    validate_tender_edit, validate_tender_fields,
};

#[test]
fn test_validate_name_accepts_boundary_length() {
    let name: String = "n".repeat(MAX_NAME_LENGTH);
    assert!(validate_name(&name).is_ok());
}

#[test]
fn test_validate_name_rejects_too_long() {
    let name: String = "n".repeat(MAX_NAME_LENGTH + 1);
    assert!(matches!(
        validate_name(&name),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_name_rejects_blank() {
    assert!(matches!(validate_name(""), Err(DomainError::InvalidName(_))));
    assert!(matches!(
        validate_name("   "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_name_counts_characters_not_bytes() {
    // 100 two-byte characters
    let name: String = "я".repeat(MAX_NAME_LENGTH);
    assert!(validate_name(&name).is_ok());
}

#[test]
fn test_validate_description_allows_empty() {
    assert!(validate_description("").is_ok());
}

#[test]
fn test_validate_description_rejects_too_long() {
    let description: String = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
    assert!(matches!(
        validate_description(&description),
        Err(DomainError::InvalidDescription(_))
    ));
}

#[test]
fn test_validate_service_type_rejects_blank() {
    assert!(matches!(
        validate_service_type(""),
        Err(DomainError::InvalidServiceType(_))
    ));
    assert!(validate_service_type("Delivery").is_ok());
}

#[test]
fn test_validate_identifier_names_field() {
    let result: Result<(), DomainError> = validate_identifier("organizationId", " ");
    assert_eq!(
        result,
        Err(DomainError::InvalidIdentifier {
            field: "organizationId"
        })
    );
    assert!(validate_identifier("organizationId", "org-1").is_ok());
}

#[test]
fn test_validate_tender_fields_reports_first_failure() {
    let fields: TenderFields = TenderFields::new("", &"d".repeat(600), "");
    assert!(matches!(
        validate_tender_fields(&fields),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_tender_fields_accepts_valid() {
    let fields: TenderFields = TenderFields::new("Road repair", "Fix potholes", "Construction");
    assert!(validate_tender_fields(&fields).is_ok());
}

#[test]
fn test_validate_tender_edit_rejects_empty_edit() {
    assert_eq!(
        validate_tender_edit(&TenderEdit::default()),
        Err(DomainError::NoFieldsToUpdate)
    );
}

#[test]
fn test_validate_tender_edit_checks_only_provided_fields() {
    let edit: TenderEdit = TenderEdit {
        description: Some(String::from("new description")),
        ..TenderEdit::default()
    };
    assert!(validate_tender_edit(&edit).is_ok());

    let bad: TenderEdit = TenderEdit {
        service_type: Some(String::new()),
        ..TenderEdit::default()
    };
    assert!(matches!(
        validate_tender_edit(&bad),
        Err(DomainError::InvalidServiceType(_))
    ));
}
