//! # patina-forms
//!
//! Per-field metadata and metadata-driven form rendering.
//!
//! A [`FieldDescriptor`] describes one form field: its name (which doubles as
//! the HTML identifier and the key into the submitted value bag), its
//! [`FieldType`] variant, constraints and rendering hints. [`render_field`]
//! dispatches a descriptor plus the current [`FormData`] to exactly one
//! widget per variant; the variant set is closed, so adding a field type is a
//! compile-time-visible change at every consumption site.
//!
//! Rendering is pure and infallible: missing values resolve to the field
//! default or an empty string, never an error.

pub mod data;
pub mod error;
pub mod field;
pub mod render;

pub use data::FormData;
pub use error::{validate_required, FormError, ValidationErrors};
pub use field::{FieldDescriptor, FieldType};
pub use render::{html_escape, render_field};
