//! MFA page behaviors: QR drawing, secret copy feedback, code autofocus.

use std::rc::Rc;

use patina_contract::{
    CODE_INPUT_ID, COPY_BUTTON_CLASS, COPY_ICON_CLASS, HIDDEN_CLASS, HYDRATED_CLASS,
    MFA_SETUP_VIEW_CLASS, OTPAUTH_URL_ATTR, QR_CONTAINER_ID, SECRET_TEXT_CLASS, SUCCESS_ICON_CLASS,
};
use qrcode::render::svg;
use qrcode::QrCode;

use crate::dom::{Dom, Element, EventKind};

/// How long the success icon stays visible after a copy.
const COPY_FEEDBACK_MS: u32 = 2000;

/// Hydrates the MFA setup page.
///
/// Reads the enrollment URI from the container's data attribute, draws a QR
/// code into the empty placeholder, and wires the copy button: clipboard
/// write, icon swap, and a fixed-delay revert. The revert timer is
/// fire-and-forget; a second copy before it fires schedules a second
/// revert, which is harmless because both set the same terminal state.
pub fn hydrate_mfa_setup<D: Dom>(dom: &D) {
    let Some(container) = dom.query_selector(&format!(".{MFA_SETUP_VIEW_CLASS}")) else {
        return;
    };
    if container.has_class(HYDRATED_CLASS) {
        return;
    }
    container.class_list_add(HYDRATED_CLASS);

    if let Some(uri) = container.attribute(OTPAUTH_URL_ATTR) {
        if let Some(target) = dom.element_by_id(QR_CONTAINER_ID) {
            if let Ok(markup) = qr_svg(&uri) {
                target.set_inner_html(&markup);
            }
        }
    }

    let Some(button) = dom.query_selector(&format!(".{COPY_BUTTON_CLASS}")) else {
        return;
    };

    let dom = dom.clone();
    button.add_event_listener(
        EventKind::Click,
        Rc::new(move |_| {
            let Some(secret) = dom.query_selector(&format!(".{SECRET_TEXT_CLASS}")) else {
                return;
            };
            dom.copy_to_clipboard(&secret.text_content());

            let copy_icon = dom.query_selector(&format!(".{COPY_ICON_CLASS}"));
            let success_icon = dom.query_selector(&format!(".{SUCCESS_ICON_CLASS}"));
            if let Some(icon) = &copy_icon {
                icon.class_list_add(HIDDEN_CLASS);
            }
            if let Some(icon) = &success_icon {
                icon.class_list_remove(HIDDEN_CLASS);
            }

            dom.set_timeout(
                COPY_FEEDBACK_MS,
                Box::new(move || {
                    if let Some(icon) = copy_icon {
                        icon.class_list_remove(HIDDEN_CLASS);
                    }
                    if let Some(icon) = success_icon {
                        icon.class_list_add(HIDDEN_CLASS);
                    }
                }),
            );
        }),
    );
}

/// Moves focus to the verification code input, best-effort.
pub fn hydrate_mfa_verify<D: Dom>(dom: &D) {
    if let Some(input) = dom.element_by_id(CODE_INPUT_ID) {
        input.focus();
    }
}

fn qr_svg(data: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeDom, FakeElement};

    struct Page {
        dom: FakeDom,
        qr: FakeElement,
        button: FakeElement,
        copy_icon: FakeElement,
        success_icon: FakeElement,
    }

    fn setup_page() -> Page {
        let dom = FakeDom::new("/admin/mfa/setup");
        dom.insert(
            FakeElement::new("div")
                .class(MFA_SETUP_VIEW_CLASS)
                .attr(OTPAUTH_URL_ATTR, "otpauth://totp/Admin:alice?secret=ABC"),
        );
        let qr = dom.insert(FakeElement::new("div").id(QR_CONTAINER_ID));
        let button = dom.insert(FakeElement::new("button").class(COPY_BUTTON_CLASS));
        let copy_icon = dom.insert(FakeElement::new("span").class(COPY_ICON_CLASS));
        let success_icon = dom.insert(
            FakeElement::new("span")
                .class(SUCCESS_ICON_CLASS)
                .class(HIDDEN_CLASS),
        );
        dom.insert(
            FakeElement::new("code")
                .class(SECRET_TEXT_CLASS)
                .text("JBSWY3DPEHPK3PXP"),
        );

        Page {
            dom,
            qr,
            button,
            copy_icon,
            success_icon,
        }
    }

    #[test]
    fn test_qr_is_drawn_into_placeholder() {
        let page = setup_page();
        hydrate_mfa_setup(&page.dom);

        assert!(page.qr.inner_html().contains("<svg"));
    }

    #[test]
    fn test_copy_writes_clipboard_and_swaps_icons() {
        let page = setup_page();
        hydrate_mfa_setup(&page.dom);

        page.button.click();
        assert_eq!(page.dom.clipboard(), vec!["JBSWY3DPEHPK3PXP".to_string()]);
        assert!(page.copy_icon.has_class(HIDDEN_CLASS));
        assert!(!page.success_icon.has_class(HIDDEN_CLASS));

        page.dom.run_timers();
        assert!(!page.copy_icon.has_class(HIDDEN_CLASS));
        assert!(page.success_icon.has_class(HIDDEN_CLASS));
    }

    #[test]
    fn test_second_copy_before_revert_is_harmless() {
        let page = setup_page();
        hydrate_mfa_setup(&page.dom);

        page.button.click();
        page.button.click();
        assert_eq!(page.dom.pending_timers(), 2);

        // Both reverts set the same terminal state.
        page.dom.run_timers();
        assert!(!page.copy_icon.has_class(HIDDEN_CLASS));
        assert!(page.success_icon.has_class(HIDDEN_CLASS));
    }

    #[test]
    fn test_double_hydration_attaches_once() {
        let page = setup_page();
        hydrate_mfa_setup(&page.dom);
        hydrate_mfa_setup(&page.dom);

        assert_eq!(page.button.listener_count(EventKind::Click), 1);
    }

    #[test]
    fn test_missing_page_is_a_silent_no_op() {
        let dom = FakeDom::new("/admin/posts");
        hydrate_mfa_setup(&dom);
        assert!(dom.clipboard().is_empty());
    }

    #[test]
    fn test_verify_focuses_code_input() {
        let dom = FakeDom::new("/admin/mfa/verify");
        let input = dom.insert(FakeElement::new("input").id(CODE_INPUT_ID));

        hydrate_mfa_verify(&dom);
        assert!(input.is_focused());
    }

    #[test]
    fn test_verify_without_input_is_a_no_op() {
        let dom = FakeDom::new("/admin/mfa/verify");
        hydrate_mfa_verify(&dom);
    }
}
