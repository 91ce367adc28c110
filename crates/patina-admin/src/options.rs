//! Per-model admin configuration.

use std::collections::{HashMap, HashSet};

use patina_forms::FieldDescriptor;
use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

/// Configuration for how one model appears in the admin.
///
/// Pure data: built once at startup, validated, then shared read-only
/// across concurrent render calls. Consumers never mutate it during a
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAdmin {
    /// Singular display name (e.g. "Post").
    pub model_name: String,
    /// Plural display name (e.g. "Posts").
    pub model_name_plural: String,
    /// URL-safe path segment (e.g. "posts").
    pub url_path: String,
    /// Ordered field names shown as list columns.
    pub list_fields: Vec<String>,
    /// Column header overrides by field name.
    pub list_headers: HashMap<String, String>,
    /// Ordered field descriptors for the edit form.
    pub edit_fields: Vec<FieldDescriptor>,
}

impl ModelAdmin {
    /// Creates a configuration for the given model name.
    ///
    /// The plural and the URL segment are derived from the name and can be
    /// overridden with [`ModelAdmin::model_name_plural`] and
    /// [`ModelAdmin::url_path`].
    pub fn new(model_name: impl Into<String>) -> Self {
        let model_name = model_name.into();
        let model_name_plural = pluralize(&model_name);
        let url_path = model_name_plural.to_lowercase().replace(' ', "-");

        Self {
            model_name,
            model_name_plural,
            url_path,
            list_fields: Vec::new(),
            list_headers: HashMap::new(),
            edit_fields: Vec::new(),
        }
    }

    /// Overrides the plural display name.
    #[must_use]
    pub fn model_name_plural(mut self, plural: impl Into<String>) -> Self {
        self.model_name_plural = plural.into();
        self
    }

    /// Overrides the URL segment.
    #[must_use]
    pub fn url_path(mut self, path: impl Into<String>) -> Self {
        self.url_path = path.into();
        self
    }

    /// Sets the list columns.
    #[must_use]
    pub fn list_fields(mut self, fields: &[&str]) -> Self {
        self.list_fields = fields.iter().map(|f| (*f).to_string()).collect();
        self
    }

    /// Overrides one column header.
    #[must_use]
    pub fn list_header(mut self, field: &str, label: &str) -> Self {
        self.list_headers.insert(field.to_string(), label.to_string());
        self
    }

    /// Appends an edit-form field.
    #[must_use]
    pub fn edit_field(mut self, field: FieldDescriptor) -> Self {
        self.edit_fields.push(field);
        self
    }

    /// Returns the display label for a list column.
    ///
    /// Falls back to the capitalized field name when no override exists.
    pub fn column_label(&self, field: &str) -> String {
        self.list_headers
            .get(field)
            .cloned()
            .unwrap_or_else(|| capitalize(field))
    }

    /// Checks the descriptor invariants.
    ///
    /// Edit field names must be unique (they double as HTML identifiers and
    /// value-bag keys) and the URL segment must be a non-empty path-safe
    /// string.
    pub fn validate(&self) -> Result<()> {
        if self.url_path.is_empty()
            || !self
                .url_path
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AdminError::InvalidUrlPath(self.url_path.clone()));
        }

        let mut seen = HashSet::new();
        for field in &self.edit_fields {
            if !seen.insert(field.name.as_str()) {
                return Err(AdminError::DuplicateEditField(field.name.clone()));
            }
        }

        Ok(())
    }
}

/// Uppercases the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Simple pluralization (adds 's' or 'es').
fn pluralize(name: &str) -> String {
    if name.ends_with('s') || name.ends_with('x') || name.ends_with("ch") || name.ends_with("sh") {
        format!("{name}es")
    } else if name.ends_with('y') {
        let mut s = name.to_string();
        s.pop();
        format!("{s}ies")
    } else {
        format!("{name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patina_forms::FieldType;

    #[test]
    fn test_derived_names() {
        let admin = ModelAdmin::new("Post");
        assert_eq!(admin.model_name, "Post");
        assert_eq!(admin.model_name_plural, "Posts");
        assert_eq!(admin.url_path, "posts");

        assert_eq!(ModelAdmin::new("Category").model_name_plural, "Categories");
        assert_eq!(ModelAdmin::new("Box").url_path, "boxes");
    }

    #[test]
    fn test_column_label_fallback() {
        let admin = ModelAdmin::new("Post")
            .list_fields(&["title", "created_at"])
            .list_header("created_at", "Created");

        assert_eq!(admin.column_label("title"), "Title");
        assert_eq!(admin.column_label("created_at"), "Created");
    }

    #[test]
    fn test_validate_rejects_duplicate_edit_fields() {
        let admin = ModelAdmin::new("Post")
            .edit_field(FieldDescriptor::new("title", "Title", FieldType::Text))
            .edit_field(FieldDescriptor::new("title", "Title", FieldType::Slug));

        assert_eq!(
            admin.validate(),
            Err(AdminError::DuplicateEditField("title".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unsafe_url_path() {
        let admin = ModelAdmin::new("Post").url_path("blog/posts");
        assert_eq!(
            admin.validate(),
            Err(AdminError::InvalidUrlPath("blog/posts".to_string()))
        );
        assert!(ModelAdmin::new("Post").url_path("blog-posts").validate().is_ok());
    }
}
