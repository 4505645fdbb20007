//! Input validation for rostering runs.
//!
//! Checks the roster against the session before allocation. Detects:
//! - Blank names
//! - Duplicate names
//! - Availability entries naming shifts the working catalog lacks
//!
//! Weekly caps below 1 are not reported; they mean "no cap".

use std::collections::HashSet;

use crate::models::{Person, ShiftCatalog};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two people share the same name.
    DuplicateName,
    /// A person has an empty or whitespace-only name.
    EmptyName,
    /// Availability refers to a shift that is not in the working catalog.
    UnknownShift,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against the working catalog.
///
/// Checks:
/// 1. Every name is non-blank
/// 2. Names are unique
/// 3. Regular staff availability only names shifts in `catalog`
///
/// Fill-in staff availability is ignored, so it is not checked.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Person], catalog: &ShiftCatalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (idx, person) in roster.iter().enumerate() {
        if person.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Person #{} has no name", idx + 1),
            ));
        } else if !names.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate name: {}", person.name),
            ));
        }

        if person.is_fill_in {
            continue;
        }
        for shift in &person.available_shifts {
            if !catalog.contains(shift) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownShift,
                    format!("'{}' is available for unknown shift {}", person.name, shift),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
