//! Create/edit form template.

use ironhtml::html;
use ironhtml_elements::Div;
use patina_contract::AdminRoutes;
use patina_forms::{render_field, FieldDescriptor, FieldType, FormData};

use super::html_escape;
use crate::options::ModelAdmin;

/// Renders the editor form for one model instance.
///
/// Create vs. edit mode follows `data.id`: an absent id renders the "New"
/// heading and posts to the collection URL, a present id renders "Edit" and
/// posts to the item URL. One labelled group is emitted per edit-field
/// descriptor, in descriptor order.
pub fn render_editor_view(admin: &ModelAdmin, data: &FormData, routes: &AdminRoutes) -> String {
    let is_new = data.is_new();
    let heading = if is_new {
        format!("New {}", admin.model_name)
    } else {
        format!("Edit {}", admin.model_name)
    };
    let action = match &data.id {
        None => routes.list(&admin.url_path),
        Some(id) => routes.item(&admin.url_path, id),
    };
    let submit_label = if is_new { "Create" } else { "Update" }.to_string();
    let cancel_url = routes.list(&admin.url_path);

    let mut form = html! {
        form.class("editor-form").action(#action).method("post")
    };

    for field in &admin.edit_fields {
        let group = render_field_group(field, data);
        form = form.child::<Div, _>(|d| d.raw(&group));
    }

    form = form.child::<Div, _>(|d| {
        let submit = html! {
            button.type_("submit").class("button button-primary") { #submit_label }
        };
        let cancel = html! {
            a.class("button button-quiet").href(#cancel_url) { "Cancel" }
        };
        d.class("form-actions").raw(submit.render()).raw(cancel.render())
    });

    let title = html! {
        h2.class("editor-title") { #heading }
    };

    format!(
        r#"<div class="editor-view">
<header class="editor-header">
{title}
<p class="editor-subtitle">Fill in the details for the {subject}</p>
</header>
{form}
</div>"#,
        title = title.render(),
        subject = html_escape(&admin.model_name.to_lowercase()),
        form = form.render(),
    )
}

/// Renders one labelled field group.
///
/// Hidden fields carry no label or help text; everything else gets a label
/// (with an "(optional)" marker on non-required fields), the widget, and an
/// optional help paragraph.
fn render_field_group(field: &FieldDescriptor, data: &FormData) -> String {
    let widget_html = render_field(field, data);
    if field.field_type == FieldType::Hidden {
        return widget_html;
    }

    let name = field.name.clone();
    let label_text = if field.required {
        field.label.clone()
    } else {
        format!("{} (optional)", field.label)
    };
    let help_text = field.help_text.clone();

    let label_el = html! {
        label.for_(#name).class("form-label") { #label_text }
    };

    html! { div.class("form-group") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-help")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_admin() -> ModelAdmin {
        ModelAdmin::new("Post")
            .edit_field(FieldDescriptor::new("title", "Title", FieldType::Text).required())
            .edit_field(
                FieldDescriptor::new("body", "Body", FieldType::Markdown)
                    .help_text("Supports markdown"),
            )
    }

    #[test]
    fn test_create_mode() {
        let html = render_editor_view(&post_admin(), &FormData::new(), &AdminRoutes::default());

        assert!(html.contains("New Post"));
        assert!(html.contains("Create"));
        assert!(html.contains(r#"action="/admin/posts""#));
        assert!(!html.contains("/admin/posts/7"));
    }

    #[test]
    fn test_edit_mode_posts_to_item_url() {
        let data = FormData::new().id("7").value("title", "Hello");
        let html = render_editor_view(&post_admin(), &data, &AdminRoutes::default());

        assert!(html.contains("Edit Post"));
        assert!(html.contains("Update"));
        assert!(html.contains(r#"action="/admin/posts/7""#));
        assert!(html.contains(r#"value="Hello""#));
    }

    #[test]
    fn test_field_groups_carry_labels_and_help() {
        let html = render_editor_view(&post_admin(), &FormData::new(), &AdminRoutes::default());

        assert!(html.contains("Title"));
        assert!(html.contains("Body (optional)"));
        assert!(html.contains("Supports markdown"));
        assert!(html.contains(r#"for="title""#));
    }

    #[test]
    fn test_hidden_fields_have_no_label() {
        let admin = ModelAdmin::new("Post")
            .edit_field(FieldDescriptor::new("token", "Token", FieldType::Hidden));
        let html = render_editor_view(&admin, &FormData::new(), &AdminRoutes::default());

        assert!(html.contains(r#"type="hidden""#));
        assert!(!html.contains(r#"for="token""#));
    }

    #[test]
    fn test_cancel_links_back_to_list() {
        let html = render_editor_view(&post_admin(), &FormData::new(), &AdminRoutes::default());
        assert!(html.contains(r#"href="/admin/posts""#));
    }
}
