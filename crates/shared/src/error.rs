use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::BiomarkerField;

/// Per-field validation failure. Messages are fixed and never embed the raw
/// input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid value")]
    Invalid,
}

/// Field-keyed validation errors; an empty map means the input is valid.
///
/// Recomputed wholesale on every validation pass. Single entries are cleared
/// through [`FieldErrors::clear`] when the user edits the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    issues: BTreeMap<BiomarkerField, ValidationIssue>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: BiomarkerField, issue: ValidationIssue) {
        self.issues.insert(field, issue);
    }

    pub fn get(&self, field: BiomarkerField) -> Option<ValidationIssue> {
        self.issues.get(&field).copied()
    }

    pub fn clear(&mut self, field: BiomarkerField) {
        self.issues.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}
