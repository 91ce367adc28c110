//! Markup templates for the admin screens.
//!
//! Templates return plain strings; page chrome (layout, stylesheet, icons)
//! is an external collaborator that wraps them. Every interactive hook these
//! templates emit is a `patina-contract` constant.

pub mod auth;
pub mod editor;
pub mod list;

pub(crate) use patina_forms::html_escape;
