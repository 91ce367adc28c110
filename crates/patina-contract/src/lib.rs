//! # patina-contract
//!
//! The shared contract between the server-side renderer and the client-side
//! hydrator. Both sides agree on two things only:
//!
//! - a fixed set of selector hooks (classes, ids, `data-*` attributes and one
//!   input-group name) that the renderer emits and the hydrator queries, and
//! - the admin route shapes built from a base path.
//!
//! Changing a selector string on one side without the other breaks hydration
//! silently, which is why every such string lives here as a named constant
//! consumed by both crates rather than as duplicated literals.

mod routes;
mod selectors;

pub use routes::AdminRoutes;
pub use selectors::{
    BULK_DELETE_CLASS, BULK_EDIT_CLASS, CODE_INPUT_ID, COPY_BUTTON_CLASS, COPY_ICON_CLASS,
    DELETE_ACTION_CLASS, HIDDEN_CLASS, HYDRATED_CLASS, MFA_SETUP_VIEW_CLASS, OTPAUTH_URL_ATTR,
    QR_CONTAINER_ID, ROW_SELECTION_NAME, SECRET_TEXT_CLASS, SELECT_ALL_ID, SUCCESS_ICON_CLASS,
};
