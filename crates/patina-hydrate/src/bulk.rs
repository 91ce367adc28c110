//! Bulk selection: row checkboxes gating the bulk edit/delete buttons.

use std::rc::Rc;

use patina_contract::{
    AdminRoutes, BULK_DELETE_CLASS, BULK_EDIT_CLASS, HYDRATED_CLASS, ROW_SELECTION_NAME,
    SELECT_ALL_ID,
};

use crate::dom::{Dom, Element, EventKind};

fn selection_selector() -> String {
    format!("[name='{ROW_SELECTION_NAME}']")
}

fn selected_ids<D: Dom>(dom: &D) -> Vec<String> {
    dom.query_selector_all(&selection_selector())
        .into_iter()
        .filter(Element::checked)
        .map(|checkbox| checkbox.value())
        .collect()
}

/// Reflects the selection count into the bulk button disabled states:
/// edit is enabled iff exactly one row is selected, delete iff any is.
fn update_button_states<D: Dom>(dom: &D) {
    let count = selected_ids(dom).len();
    let has_selection = count > 0;
    let single_selection = count == 1;

    if let Some(edit) = dom.query_selector(&format!(".{BULK_EDIT_CLASS}")) {
        edit.set_disabled(!single_selection);
    }
    if let Some(delete) = dom.query_selector(&format!(".{BULK_DELETE_CLASS}")) {
        delete.set_disabled(!has_selection);
    }
}

/// Wires the row-selection checkbox group, the select-all control and the
/// bulk edit/delete buttons.
///
/// The routes are recovered from the document pathname; on pathnames with
/// fewer than two segments this pass is inert. The checked-inputs-by-name
/// scan is the only selection state there is; nothing is cached between
/// events. Safe to re-run: hydrated elements are marked and skipped.
pub fn hydrate_bulk_actions<D: Dom>(dom: &D) {
    let Some((routes, url_path)) = AdminRoutes::from_pathname(&dom.pathname()) else {
        return;
    };

    for checkbox in dom.query_selector_all(&selection_selector()) {
        if checkbox.has_class(HYDRATED_CLASS) {
            continue;
        }
        checkbox.class_list_add(HYDRATED_CLASS);

        let dom = dom.clone();
        checkbox.add_event_listener(
            EventKind::Change,
            Rc::new(move |_| update_button_states(&dom)),
        );
    }

    if let Some(select_all) = dom.query_selector(&format!("#{SELECT_ALL_ID}")) {
        if !select_all.has_class(HYDRATED_CLASS) {
            select_all.class_list_add(HYDRATED_CLASS);

            let dom = dom.clone();
            let control = select_all.clone();
            select_all.add_event_listener(
                EventKind::Change,
                Rc::new(move |_| {
                    let checked = control.checked();
                    for checkbox in dom.query_selector_all(&selection_selector()) {
                        checkbox.set_checked(checked);
                    }
                    update_button_states(&dom);
                }),
            );
        }
    }

    if let Some(edit_btn) = dom.query_selector(&format!(".{BULK_EDIT_CLASS}")) {
        if !edit_btn.has_class(HYDRATED_CLASS) {
            edit_btn.class_list_add(HYDRATED_CLASS);

            let dom = dom.clone();
            let routes = routes.clone();
            let url_path = url_path.clone();
            edit_btn.add_event_listener(
                EventKind::Click,
                Rc::new(move |_| {
                    if let Some(first) = selected_ids(&dom).first() {
                        dom.navigate(&routes.edit(&url_path, first));
                    }
                }),
            );
        }
    }

    if let Some(delete_btn) = dom.query_selector(&format!(".{BULK_DELETE_CLASS}")) {
        if !delete_btn.has_class(HYDRATED_CLASS) {
            delete_btn.class_list_add(HYDRATED_CLASS);

            let dom = dom.clone();
            delete_btn.add_event_listener(
                EventKind::Click,
                Rc::new(move |_| {
                    let ids = selected_ids(&dom);
                    if ids.is_empty() {
                        return;
                    }
                    let message = if ids.len() == 1 {
                        "Are you sure you want to delete this item?".to_string()
                    } else {
                        format!("Are you sure you want to delete {} items?", ids.len())
                    };
                    if dom.confirm(&message) {
                        dom.navigate(&routes.bulk_delete(&url_path, &ids));
                    }
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeDom, FakeElement};

    struct Page {
        dom: FakeDom,
        rows: Vec<FakeElement>,
        select_all: FakeElement,
        edit_btn: FakeElement,
        delete_btn: FakeElement,
    }

    fn list_page() -> Page {
        let dom = FakeDom::new("/admin/posts");
        let rows = vec![
            dom.insert(
                FakeElement::new("input")
                    .name(ROW_SELECTION_NAME)
                    .value("1"),
            ),
            dom.insert(
                FakeElement::new("input")
                    .name(ROW_SELECTION_NAME)
                    .value("2"),
            ),
        ];
        let select_all = dom.insert(FakeElement::new("input").id(SELECT_ALL_ID));
        let edit_btn = dom.insert(
            FakeElement::new("button")
                .class(BULK_EDIT_CLASS)
                .start_disabled(),
        );
        let delete_btn = dom.insert(
            FakeElement::new("button")
                .class(BULK_DELETE_CLASS)
                .start_disabled(),
        );

        Page {
            dom,
            rows,
            select_all,
            edit_btn,
            delete_btn,
        }
    }

    #[test]
    fn test_button_states_track_selection_count() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        // 0 selected: both disabled.
        page.rows[0].change();
        assert!(page.edit_btn.disabled());
        assert!(page.delete_btn.disabled());

        // 1 selected: both enabled.
        page.rows[0].set_checked(true);
        page.rows[0].change();
        assert!(!page.edit_btn.disabled());
        assert!(!page.delete_btn.disabled());

        // 2 selected: edit disabled, delete enabled.
        page.rows[1].set_checked(true);
        page.rows[1].change();
        assert!(page.edit_btn.disabled());
        assert!(!page.delete_btn.disabled());
    }

    #[test]
    fn test_select_all_propagates_to_group() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        page.select_all.set_checked(true);
        page.select_all.change();

        assert!(page.rows.iter().all(FakeElement::is_checked));
        assert!(page.edit_btn.disabled(), "two selected, edit stays disabled");
        assert!(!page.delete_btn.disabled());

        page.select_all.set_checked(false);
        page.select_all.change();
        assert!(page.rows.iter().all(|r| !r.is_checked()));
        assert!(page.delete_btn.disabled());
    }

    #[test]
    fn test_bulk_edit_navigates_to_first_selected() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        page.rows[0].set_checked(true);
        page.edit_btn.click();
        assert_eq!(page.dom.navigations(), vec!["/admin/posts/1/edit".to_string()]);
    }

    #[test]
    fn test_bulk_edit_with_no_selection_does_nothing() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        page.edit_btn.click();
        assert!(page.dom.navigations().is_empty());
    }

    #[test]
    fn test_bulk_delete_confirms_with_count_and_navigates() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        page.rows[0].set_checked(true);
        page.rows[1].set_checked(true);
        page.dom.set_confirm_answer(true);
        page.delete_btn.click();

        assert_eq!(
            page.dom.confirms(),
            vec!["Are you sure you want to delete 2 items?".to_string()]
        );
        assert_eq!(
            page.dom.navigations(),
            vec!["/admin/posts/delete?ids=1,2".to_string()]
        );
    }

    #[test]
    fn test_bulk_delete_single_item_message() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);

        page.rows[1].set_checked(true);
        page.dom.set_confirm_answer(false);
        page.delete_btn.click();

        assert_eq!(
            page.dom.confirms(),
            vec!["Are you sure you want to delete this item?".to_string()]
        );
        assert!(page.dom.navigations().is_empty(), "declined, no navigation");
    }

    #[test]
    fn test_double_hydration_attaches_once() {
        let page = list_page();
        hydrate_bulk_actions(&page.dom);
        hydrate_bulk_actions(&page.dom);

        assert_eq!(page.rows[0].listener_count(EventKind::Change), 1);
        assert_eq!(page.select_all.listener_count(EventKind::Change), 1);
        assert_eq!(page.delete_btn.listener_count(EventKind::Click), 1);

        page.rows[0].set_checked(true);
        page.dom.set_confirm_answer(true);
        page.delete_btn.click();
        assert_eq!(page.dom.navigations().len(), 1, "one click, one navigation");
    }

    #[test]
    fn test_short_pathname_is_inert() {
        let dom = FakeDom::new("/admin");
        let row = dom.insert(
            FakeElement::new("input")
                .name(ROW_SELECTION_NAME)
                .value("1"),
        );
        hydrate_bulk_actions(&dom);
        assert_eq!(row.listener_count(EventKind::Change), 0);
    }
}
