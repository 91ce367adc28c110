//! # patina-admin
//!
//! Generic CRUD admin screens driven by per-model field metadata.
//!
//! A [`ModelAdmin`] describes how one entity type appears in the admin:
//! display names, URL segment, list columns and edit-form field descriptors.
//! The templates turn a descriptor plus plain value bags ([`ListRow`],
//! [`patina_forms::FormData`]) into markup strings:
//!
//! - [`render_list_view`] - sortable table with optional row selection,
//!   bulk-action buttons, per-row edit/delete actions and an empty state
//! - [`render_editor_view`] - create/edit form built from the descriptor's
//!   edit fields
//! - sign-in and MFA setup/verify pages with the hooks the client-side
//!   hydrator attaches behavior to
//!
//! Rendering is synchronous and side-effect free: identical inputs produce
//! identical markup, and nothing flows back from the client. The selector
//! hooks the markup carries are the named constants of `patina-contract`,
//! shared with `patina-hydrate`. Routing, persistence, authentication and
//! page chrome belong to external collaborators.

pub mod data;
pub mod error;
pub mod options;
pub mod site;
pub mod templates;

pub use data::ListRow;
pub use error::{AdminError, Result};
pub use options::ModelAdmin;
pub use site::AdminSite;
pub use templates::auth::{render_mfa_setup_view, render_mfa_verify_view, render_sign_in_view};
pub use templates::editor::render_editor_view;
pub use templates::list::{render_list_view, ListOptions};
