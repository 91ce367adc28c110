//! Field descriptors and the closed field-type set.

use serde::{Deserialize, Serialize};

/// The closed set of form field kinds.
///
/// Every variant maps to exactly one rendering strategy in
/// [`crate::render::render_field`]; there is deliberately no catch-all
/// branch, so a new variant forces every match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Email,
    Url,
    Password,
    Number,
    Date,
    /// Rendered as a plain text input, not a native datetime control.
    DateTime,
    Textarea,
    Checkbox,
    Select,
    /// Comma-joined multi-value text input.
    Tags,
    /// Textarea with a monospace, vertically resizable presentation.
    Markdown,
    Slug,
    Hidden,
    /// Declared but unimplemented; renders a placeholder paragraph.
    MultiSelect,
}

impl FieldType {
    /// Returns the HTML `type` attribute for single-line input variants.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::Hidden => "hidden",
            Self::Text
            | Self::DateTime
            | Self::Textarea
            | Self::Checkbox
            | Self::Select
            | Self::Tags
            | Self::Markdown
            | Self::Slug
            | Self::MultiSelect => "text",
        }
    }
}

/// Describes one form field: type, constraints and rendering hints.
///
/// `name` is stable and used both as the HTML field identifier and as the
/// key into the form value bag; renderer and data carrier must agree on
/// this key space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, unique within a form.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Which widget renders this field.
    pub field_type: FieldType,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Whether the rendered input is read-only.
    pub read_only: bool,
    /// Placeholder text (falls back to the label).
    pub placeholder: Option<String>,
    /// Help text shown below the input.
    pub help_text: Option<String>,
    /// Value used when the form data carries none.
    pub default_value: Option<String>,
    /// `(value, label)` pairs for enumerated types.
    pub options: Vec<(String, String)>,
}

impl FieldDescriptor {
    /// Creates a descriptor with the given name, label and type.
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            read_only: false,
            placeholder: None,
            help_text: None,
            default_value: None,
            options: Vec::new(),
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the `(value, label)` options for enumerated types.
    #[must_use]
    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let field = FieldDescriptor::new("status", "Status", FieldType::Select)
            .required()
            .help_text("Publication status")
            .options(&[("draft", "Draft"), ("published", "Published")]);

        assert_eq!(field.name, "status");
        assert!(field.required);
        assert!(!field.read_only);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.options[0].0, "draft");
    }

    #[test]
    fn test_input_type_mapping() {
        assert_eq!(FieldType::Email.input_type(), "email");
        assert_eq!(FieldType::Date.input_type(), "date");
        assert_eq!(FieldType::Slug.input_type(), "text");
        // Deliberate simplification: no native datetime control.
        assert_eq!(FieldType::DateTime.input_type(), "text");
    }

    #[test]
    fn test_field_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&FieldType::MultiSelect).unwrap(),
            "\"multiSelect\""
        );
        let back: FieldType = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(back, FieldType::Markdown);
    }
}
