//! List view template.

use patina_contract::{
    AdminRoutes, BULK_DELETE_CLASS, BULK_EDIT_CLASS, DELETE_ACTION_CLASS, ROW_SELECTION_NAME,
    SELECT_ALL_ID,
};

use super::html_escape;
use crate::data::ListRow;
use crate::options::ModelAdmin;

/// Rendering options for the list view.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Prepend a selection checkbox column and bulk-action buttons.
    pub use_row_selection: bool,
    /// Empty-state headline; defaults to "No {plural} found".
    pub empty_headline: Option<String>,
    /// Empty-state subcopy; defaults to a create hint.
    pub empty_subcopy: Option<String>,
}

impl ListOptions {
    /// Options with row selection enabled.
    pub fn with_selection() -> Self {
        Self {
            use_row_selection: true,
            ..Self::default()
        }
    }
}

/// Renders the list view for one model.
///
/// Deterministic and side-effect free: row order equals input order (the
/// `data-sortable` header marker is a client affordance only), a missing
/// cell value renders as an empty cell, and an empty row sequence renders
/// exactly one empty-state row instead of data rows.
pub fn render_list_view(
    admin: &ModelAdmin,
    rows: &[ListRow],
    routes: &AdminRoutes,
    options: &ListOptions,
) -> String {
    let header = render_header(admin, routes, options);
    let table = render_table(admin, rows, routes, options);

    format!(
        r#"<div class="generic-list-view">
{header}
{table}
</div>"#
    )
}

fn render_header(admin: &ModelAdmin, routes: &AdminRoutes, options: &ListOptions) -> String {
    let bulk_buttons = if options.use_row_selection {
        format!(
            r#"<button type="button" class="button button-quiet {BULK_EDIT_CLASS}" disabled>Edit</button>
<button type="button" class="button button-destructive {BULK_DELETE_CLASS}" disabled>Delete</button>
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<header class="list-header">
<h1 class="list-title">Manage {plural}</h1>
<div class="list-actions">
{bulk_buttons}<a class="button button-primary" href="{add_url}">Add {name}</a>
</div>
</header>"#,
        plural = html_escape(&admin.model_name_plural),
        add_url = html_escape(&routes.create(&admin.url_path)),
        name = html_escape(&admin.model_name),
    )
}

fn render_table(
    admin: &ModelAdmin,
    rows: &[ListRow],
    routes: &AdminRoutes,
    options: &ListOptions,
) -> String {
    let mut headers = String::new();
    if options.use_row_selection {
        headers.push_str(&format!(
            r#"<th class="select-cell"><input type="checkbox" id="{SELECT_ALL_ID}"></th>
"#
        ));
    }
    for field in &admin.list_fields {
        headers.push_str(&format!(
            "<th data-sortable=\"true\">{}</th>\n",
            html_escape(&admin.column_label(field))
        ));
    }
    headers.push_str(r#"<th class="actions-cell">Actions</th>"#);

    let body = if rows.is_empty() {
        render_empty_state(admin, options)
    } else {
        rows.iter()
            .map(|row| render_row(admin, row, routes, options))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<table class="list-table">
<thead>
<tr>
{headers}
</tr>
</thead>
<tbody>
{body}
</tbody>
</table>"#
    )
}

fn render_empty_state(admin: &ModelAdmin, options: &ListOptions) -> String {
    // Spans every rendered column: list fields, the actions column and the
    // selection column when enabled.
    let span =
        admin.list_fields.len() + 1 + usize::from(options.use_row_selection);

    let headline = options.empty_headline.clone().unwrap_or_else(|| {
        format!("No {} found", admin.model_name_plural.to_lowercase())
    });
    let subcopy = options
        .empty_subcopy
        .clone()
        .unwrap_or_else(|| "Click the button above to create one".to_string());

    format!(
        r#"<tr class="empty-state">
<td colspan="{span}">
<div class="empty-state-headline">{}</div>
<div class="empty-state-subcopy">{}</div>
</td>
</tr>"#,
        html_escape(&headline),
        html_escape(&subcopy),
    )
}

fn render_row(
    admin: &ModelAdmin,
    row: &ListRow,
    routes: &AdminRoutes,
    options: &ListOptions,
) -> String {
    let mut cells = String::new();

    if options.use_row_selection {
        // The shared input-group name is the sole contract the client uses
        // to enumerate selected ids.
        cells.push_str(&format!(
            r#"<td class="select-cell"><input type="checkbox" name="{ROW_SELECTION_NAME}" value="{}"></td>
"#,
            html_escape(&row.id),
        ));
    }

    for field in &admin.list_fields {
        let value = row.values.get(field).map(String::as_str).unwrap_or("");
        cells.push_str(&format!("<td>{}</td>\n", html_escape(value)));
    }

    cells.push_str(&format!(
        r#"<td class="actions-cell">
<a class="button button-quiet" href="{edit_url}">Edit</a>
<a class="button button-quiet {DELETE_ACTION_CLASS}" href="{delete_url}">Delete</a>
</td>"#,
        edit_url = html_escape(&routes.edit(&admin.url_path, &row.id)),
        delete_url = html_escape(&routes.delete(&admin.url_path, &row.id)),
    ));

    format!("<tr>\n{cells}\n</tr>")
}
