//! Error types for forms.

use std::collections::HashMap;

use thiserror::Error;

use crate::data::FormData;
use crate::field::FieldDescriptor;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed with per-field errors.
    #[error("validation errors: {0}")]
    ValidationErrors(ValidationErrors),

    /// Form data parsing error.
    #[error("failed to parse form data: {0}")]
    ParseError(String),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Checks that every required field resolves to a non-empty value.
///
/// This is the only validation this layer owns; type- and format-level
/// validation belongs to the data-access layer that consumes the submission.
pub fn validate_required(
    fields: &[FieldDescriptor],
    data: &FormData,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field in fields {
        if field.required && data.resolve(field).trim().is_empty() {
            errors.add(&field.name, format!("{} is required", field.label));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
