//! # patina-hydrate
//!
//! Progressive hydration for server-rendered admin markup.
//!
//! The server ships complete, working HTML; this crate attaches the
//! client-side behaviors on top of it by querying the selector hooks of
//! `patina-contract` and registering listeners:
//!
//! - delete links gain a confirm prompt ([`hydrate_delete_actions`])
//! - row checkboxes drive the bulk edit/delete buttons
//!   ([`hydrate_bulk_actions`])
//! - the MFA setup page gets its QR code drawn and its copy-secret
//!   feedback wired ([`hydrate_mfa_setup`])
//! - the MFA verify page focuses the code input ([`hydrate_mfa_verify`])
//!
//! Every pass is a no-op on pages without its hooks and idempotent on
//! pages with them, so [`hydrate_page`] can run unconditionally on load.
//! All document access goes through the [`Dom`]/[`Element`] traits; the
//! [`fake`] module provides an in-memory implementation for tests.

pub mod bulk;
pub mod delete;
pub mod dom;
pub mod fake;
pub mod mfa;

pub use bulk::hydrate_bulk_actions;
pub use delete::hydrate_delete_actions;
pub use dom::{Dom, Element, Event, EventHandler, EventKind};
pub use fake::{FakeDom, FakeElement};
pub use mfa::{hydrate_mfa_setup, hydrate_mfa_verify};

/// Runs every hydration pass against the document.
///
/// Each pass decides for itself whether the current page carries its
/// hooks, so this is safe to call on any admin page, any number of times.
pub fn hydrate_page<D: Dom>(dom: &D) {
    tracing::debug!(pathname = %dom.pathname(), "hydrating page");
    hydrate_delete_actions(dom);
    hydrate_bulk_actions(dom);
    hydrate_mfa_setup(dom);
    hydrate_mfa_verify(dom);
}

// Renderer/hydrator coherence: the markup the templates emit must carry
// the hooks the passes above query for, or hydration silently does
// nothing. These tests render real views and check for the shared
// selector strings.
#[cfg(test)]
mod tests {
    use patina_admin::{
        render_list_view, render_mfa_setup_view, render_mfa_verify_view, ListOptions, ListRow,
        ModelAdmin,
    };
    use patina_contract::{
        AdminRoutes, BULK_DELETE_CLASS, BULK_EDIT_CLASS, CODE_INPUT_ID, COPY_BUTTON_CLASS,
        COPY_ICON_CLASS, DELETE_ACTION_CLASS, HIDDEN_CLASS, MFA_SETUP_VIEW_CLASS,
        OTPAUTH_URL_ATTR, QR_CONTAINER_ID, ROW_SELECTION_NAME, SECRET_TEXT_CLASS, SELECT_ALL_ID,
        SUCCESS_ICON_CLASS,
    };

    #[test]
    fn test_list_markup_carries_the_hooks_hydration_queries() {
        let admin = ModelAdmin::new("Post").list_fields(&["title"]);
        let rows = vec![ListRow::new("1").value("title", "Hello")];
        let routes = AdminRoutes::new("/admin");
        let html = render_list_view(&admin, &rows, &routes, &ListOptions::with_selection());

        assert!(html.contains(DELETE_ACTION_CLASS));
        assert!(html.contains(&format!("name=\"{ROW_SELECTION_NAME}\"")));
        assert!(html.contains(&format!("id=\"{SELECT_ALL_ID}\"")));
        assert!(html.contains(BULK_EDIT_CLASS));
        assert!(html.contains(BULK_DELETE_CLASS));
    }

    #[test]
    fn test_mfa_setup_markup_carries_the_hooks_hydration_queries() {
        let routes = AdminRoutes::new("/admin");
        let html = render_mfa_setup_view(
            &routes,
            "JBSWY3DPEHPK3PXP",
            "otpauth://totp/Admin:alice?secret=JBSWY3DPEHPK3PXP",
            "alice",
        );

        assert!(html.contains(&format!("class=\"{MFA_SETUP_VIEW_CLASS}\"")));
        assert!(html.contains(&format!("{OTPAUTH_URL_ATTR}=\"")));
        assert!(html.contains(&format!("id=\"{QR_CONTAINER_ID}\"")));
        assert!(html.contains(COPY_BUTTON_CLASS));
        assert!(html.contains(SECRET_TEXT_CLASS));
        // The success icon must start hidden for the copy-feedback swap.
        assert!(html.contains(&format!("{SUCCESS_ICON_CLASS} {HIDDEN_CLASS}")));
        assert!(html.contains(COPY_ICON_CLASS));
    }

    #[test]
    fn test_mfa_verify_markup_carries_the_autofocus_target() {
        let routes = AdminRoutes::new("/admin");
        let html = render_mfa_verify_view(&routes, "alice", None);

        assert!(html.contains(&format!("id=\"{CODE_INPUT_ID}\"")));
    }
}
