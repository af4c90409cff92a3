// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::records::{TenderEdit, TenderFields};

/// Maximum length of a tender or bid name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a tender or bid description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length of a service type, in characters.
const MAX_SERVICE_TYPE_LENGTH: usize = 100;

/// Validates a tender or bid name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a tender or bid description. An empty description is allowed.
///
/// # Errors
///
/// Returns an error if the description is longer than [`MAX_DESCRIPTION_LENGTH`].
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::InvalidDescription(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a tender service type.
///
/// # Errors
///
/// Returns an error if the service type is blank or too long.
pub fn validate_service_type(service_type: &str) -> Result<(), DomainError> {
    if service_type.trim().is_empty() {
        return Err(DomainError::InvalidServiceType(String::from(
            "Service type cannot be empty",
        )));
    }
    if service_type.chars().count() > MAX_SERVICE_TYPE_LENGTH {
        return Err(DomainError::InvalidServiceType(format!(
            "Service type cannot exceed {MAX_SERVICE_TYPE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates that an identifier carried in a request is not blank.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIdentifier`] naming `field` if `value` is blank.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier { field });
    }
    Ok(())
}

/// Validates the full field set supplied at tender creation.
///
/// # Errors
///
/// Returns the first field error encountered.
pub fn validate_tender_fields(fields: &TenderFields) -> Result<(), DomainError> {
    validate_name(&fields.name)?;
    validate_description(&fields.description)?;
    validate_service_type(&fields.service_type)
}

/// Validates a partial tender edit.
///
/// Only the provided fields are checked, but at least one must be present.
///
/// # Errors
///
/// Returns [`DomainError::NoFieldsToUpdate`] for an empty edit, or the first
/// field error encountered.
pub fn validate_tender_edit(edit: &TenderEdit) -> Result<(), DomainError> {
    if edit.is_empty() {
        return Err(DomainError::NoFieldsToUpdate);
    }
    if let Some(name) = &edit.name {
        validate_name(name)?;
    }
    if let Some(description) = &edit.description {
        validate_description(description)?;
    }
    if let Some(service_type) = &edit.service_type {
        validate_service_type(service_type)?;
    }
    Ok(())
}
