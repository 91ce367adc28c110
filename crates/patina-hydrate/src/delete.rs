//! Delete confirmation for per-row delete links.

use std::rc::Rc;

use patina_contract::{DELETE_ACTION_CLASS, HYDRATED_CLASS};

use crate::dom::{Dom, Element, EventKind};

const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this?";

/// Intercepts clicks on every delete action present at hydration time.
///
/// Declining the confirm prompt cancels the default navigation; accepting
/// lets it proceed. Elements inserted after this pass are not covered
/// (there is no mutation observer). Safe to re-run: already-hydrated links
/// are skipped.
pub fn hydrate_delete_actions<D: Dom>(dom: &D) {
    for link in dom.query_selector_all(&format!(".{DELETE_ACTION_CLASS}")) {
        if link.has_class(HYDRATED_CLASS) {
            continue;
        }
        link.class_list_add(HYDRATED_CLASS);

        let dom = dom.clone();
        link.add_event_listener(
            EventKind::Click,
            Rc::new(move |event| {
                if !dom.confirm(CONFIRM_MESSAGE) {
                    event.prevent_default();
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeDom, FakeElement};

    fn dom_with_delete_link() -> (FakeDom, FakeElement) {
        let dom = FakeDom::new("/admin/posts");
        let link = dom.insert(
            FakeElement::new("a")
                .class(DELETE_ACTION_CLASS)
                .attr("href", "/admin/posts/7/delete"),
        );
        (dom, link)
    }

    #[test]
    fn test_declining_cancels_navigation() {
        let (dom, link) = dom_with_delete_link();
        hydrate_delete_actions(&dom);

        dom.set_confirm_answer(false);
        let event = link.click();
        assert!(event.default_prevented());
        assert_eq!(dom.confirms(), vec![CONFIRM_MESSAGE.to_string()]);
    }

    #[test]
    fn test_accepting_lets_navigation_proceed() {
        let (dom, link) = dom_with_delete_link();
        hydrate_delete_actions(&dom);

        dom.set_confirm_answer(true);
        let event = link.click();
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_double_hydration_attaches_once() {
        let (dom, link) = dom_with_delete_link();
        hydrate_delete_actions(&dom);
        hydrate_delete_actions(&dom);

        assert_eq!(link.listener_count(EventKind::Click), 1);

        link.click();
        assert_eq!(dom.confirms().len(), 1, "one click, one prompt");
    }

    #[test]
    fn test_no_links_is_a_silent_no_op() {
        let dom = FakeDom::new("/admin/posts");
        hydrate_delete_actions(&dom);
        assert!(dom.confirms().is_empty());
    }
}
