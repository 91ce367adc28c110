//! The list row value bag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row in a model list view.
///
/// Constructed fresh per render request from the data-access layer, keyed by
/// the same field names the model's descriptor lists, and discarded after
/// the render. `id` must be stable, unique per entity instance and URL-safe;
/// URL-safety is the data source's precondition, not checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRow {
    /// Stable entity identifier.
    pub id: String,
    /// Cell values by field name.
    pub values: HashMap<String, String>,
}

impl ListRow {
    /// Creates a row with the given id and no values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: HashMap::new(),
        }
    }

    /// Sets one cell value.
    #[must_use]
    pub fn value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder() {
        let row = ListRow::new("7").value("title", "Hello").value("status", "draft");
        assert_eq!(row.id, "7");
        assert_eq!(row.values.get("title").unwrap(), "Hello");
        assert_eq!(row.values.len(), 2);
    }
}
