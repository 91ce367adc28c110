//! Selector hooks emitted by the renderer and queried by the hydrator.

/// Input-group name shared by every row-selection checkbox in a list view.
///
/// Client code enumerates selected row ids by scanning checked inputs with
/// this name; no other selection state channel exists.
pub const ROW_SELECTION_NAME: &str = "row-selection";

/// Id of the select-all checkbox in the list header.
pub const SELECT_ALL_ID: &str = "select-all";

/// Class of the bulk edit button (enabled iff exactly one row is selected).
pub const BULK_EDIT_CLASS: &str = "bulk-edit-btn";

/// Class of the bulk delete button (enabled iff any row is selected).
pub const BULK_DELETE_CLASS: &str = "bulk-delete-btn";

/// Class of per-row delete links that get a blocking confirm prompt.
pub const DELETE_ACTION_CLASS: &str = "admin-delete-action";

/// Class of the MFA setup page container.
pub const MFA_SETUP_VIEW_CLASS: &str = "setup-mfa-view";

/// Data attribute on the MFA setup container carrying the enrollment URI.
pub const OTPAUTH_URL_ATTR: &str = "data-otpauth-url";

/// Id of the empty container the QR code is drawn into.
pub const QR_CONTAINER_ID: &str = "qrcode";

/// Class of the "copy secret" button on the MFA setup page.
pub const COPY_BUTTON_CLASS: &str = "setup-mfa-copy-button";

/// Class of the element whose text content is the shared secret.
pub const SECRET_TEXT_CLASS: &str = "setup-mfa-secret-text";

/// Class of the idle copy icon inside the copy button.
pub const COPY_ICON_CLASS: &str = "copy-icon";

/// Class of the success icon shown for two seconds after a copy.
pub const SUCCESS_ICON_CLASS: &str = "success-icon";

/// Id of the MFA verification code input (autofocus target).
pub const CODE_INPUT_ID: &str = "code";

/// Visibility toggle class; the stylesheet maps it to `display: none`.
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Marker class set on hydrated elements so re-running a hydration pass
/// never registers a second listener on the same element.
pub const HYDRATED_CLASS: &str = "is-hydrated";
