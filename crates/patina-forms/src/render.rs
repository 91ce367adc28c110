//! Field rendering: one widget per field-type variant.

use crate::data::FormData;
use crate::field::{FieldDescriptor, FieldType};

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders the widget for one field.
///
/// Dispatches on the closed [`FieldType`] set exhaustively; the current
/// value is resolved through [`FormData::resolve`]. Output is a single
/// markup fragment carrying `id`, `name`, `required`, `readonly` and a
/// type-appropriate placeholder. Labels and help text are the form
/// template's concern, not the widget's.
pub fn render_field(field: &FieldDescriptor, data: &FormData) -> String {
    let value = data.resolve(field);

    match field.field_type {
        FieldType::Text
        | FieldType::Email
        | FieldType::Url
        | FieldType::Password
        | FieldType::Number
        | FieldType::Date
        | FieldType::DateTime => render_input(field, &value, field.label.as_str()),
        FieldType::Textarea => render_textarea(field, &value, field.label.as_str(), ""),
        FieldType::Markdown => render_textarea(
            field,
            &value,
            "Markdown content",
            " form-input-markdown",
        ),
        FieldType::Checkbox => render_checkbox(field, &value),
        FieldType::Select => render_select(field, &value),
        FieldType::Tags => render_input(field, &value, "Comma separated tags"),
        FieldType::Slug => render_input(field, &value, "slug-format"),
        FieldType::Hidden => format!(
            r#"<input type="hidden" id="{name}" name="{name}" value="{value}">"#,
            name = html_escape(&field.name),
            value = html_escape(&value),
        ),
        // Known gap: callers must not rely on this variant functioning.
        FieldType::MultiSelect => {
            r#"<p class="field-unimplemented">Multi-select not yet implemented</p>"#.to_string()
        }
    }
}

fn constraint_attrs(field: &FieldDescriptor) -> String {
    let mut attrs = String::new();
    if field.required {
        attrs.push_str(" required");
    }
    if field.read_only {
        attrs.push_str(" readonly");
    }
    attrs
}

fn placeholder_for(field: &FieldDescriptor, fallback: &str) -> String {
    html_escape(field.placeholder.as_deref().unwrap_or(fallback))
}

fn render_input(field: &FieldDescriptor, value: &str, placeholder_fallback: &str) -> String {
    format!(
        r#"<input type="{input_type}" class="form-input" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}"{attrs}>"#,
        input_type = field.field_type.input_type(),
        name = html_escape(&field.name),
        value = html_escape(value),
        placeholder = placeholder_for(field, placeholder_fallback),
        attrs = constraint_attrs(field),
    )
}

fn render_textarea(
    field: &FieldDescriptor,
    value: &str,
    placeholder_fallback: &str,
    extra_class: &str,
) -> String {
    format!(
        r#"<textarea class="form-input{extra_class}" id="{name}" name="{name}" rows="5" placeholder="{placeholder}"{attrs}>{value}</textarea>"#,
        name = html_escape(&field.name),
        placeholder = placeholder_for(field, placeholder_fallback),
        attrs = constraint_attrs(field),
        value = html_escape(value),
    )
}

fn render_checkbox(field: &FieldDescriptor, value: &str) -> String {
    // Checked iff the resolved value is exactly "true"; "True" or "1" stay
    // unchecked.
    let checked = if value == "true" { " checked" } else { "" };
    let readonly = if field.read_only { " readonly" } else { "" };
    format!(
        r#"<label class="form-check" for="{name}"><input type="checkbox" id="{name}" name="{name}" value="true"{checked}{readonly}> {label}</label>"#,
        name = html_escape(&field.name),
        label = html_escape(&field.label),
    )
}

fn render_select(field: &FieldDescriptor, value: &str) -> String {
    let mut options = String::new();
    for (opt_value, opt_label) in &field.options {
        let selected = if opt_value == value { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            html_escape(opt_value),
            html_escape(opt_label),
        ));
    }

    let required = if field.required { " required" } else { "" };
    format!(
        r#"<select class="form-input" id="{name}" name="{name}"{required}>{options}</select>"#,
        name = html_escape(&field.name),
    )
}
