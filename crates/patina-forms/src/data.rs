//! The form data value bag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldDescriptor, FieldType};

/// Separator used to display multi-valued fields in a single input.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Values for one edit/create form, keyed by field name.
///
/// Constructed fresh per render from the data-access layer, borrowed by the
/// renderer for the duration of one call and discarded afterwards. A missing
/// `id` means the form creates a new item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    /// Item identifier; `None` for create forms.
    pub id: Option<String>,
    /// Scalar values by field name.
    pub values: HashMap<String, String>,
    /// Multi-valued fields (e.g. tags) by field name.
    pub multi_values: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates an empty value bag (create mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item id (edit mode).
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets a scalar value.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets a multi-value sequence.
    #[must_use]
    pub fn multi_value(mut self, name: impl Into<String>, values: &[&str]) -> Self {
        self.multi_values.insert(
            name.into(),
            values.iter().map(|v| (*v).to_string()).collect(),
        );
        self
    }

    /// Returns whether this form creates a new item.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Resolves the display value for a field.
    ///
    /// `Tags` fields use the multi-value sequence joined with `", "` when one
    /// exists; every field falls back from the scalar value to the descriptor
    /// default to the empty string. Absent keys are a valid state, never an
    /// error.
    pub fn resolve(&self, field: &FieldDescriptor) -> String {
        if field.field_type == FieldType::Tags {
            if let Some(values) = self.multi_values.get(&field.name) {
                return values.join(MULTI_VALUE_SEPARATOR);
            }
        }

        self.values
            .get(&field.name)
            .cloned()
            .or_else(|| field.default_value.clone())
            .unwrap_or_default()
    }
}
