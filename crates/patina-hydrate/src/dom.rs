//! The narrow document interface hydration runs against.
//!
//! Hydration never re-renders or restructures markup; everything it needs
//! from a document fits in these two traits: selector queries, listener
//! registration, class/checked/disabled toggles, and a handful of host
//! facilities (navigation, confirm, clipboard, one-shot timers). A browser
//! backend wraps the real DOM; [`crate::fake::FakeDom`] implements the same
//! surface in memory for tests.

use std::cell::Cell;
use std::rc::Rc;

/// Event kinds hydration listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
}

/// A dispatched event.
///
/// Only the piece of the host event hydration touches: cancelling the
/// default action (e.g. link navigation on a declined delete confirm).
#[derive(Debug, Default)]
pub struct Event {
    prevented: Cell<bool>,
}

impl Event {
    /// Creates a fresh, uncancelled event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the default action.
    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    /// Returns whether the default action was cancelled.
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// A registered event handler.
///
/// Handlers run on the host's single-threaded event dispatch, so `Rc`
/// suffices; they must be short and non-blocking.
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// One element of a live document.
pub trait Element: Clone + 'static {
    /// Returns whether the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Adds a class (no-op if present).
    fn class_list_add(&self, class: &str);

    /// Removes a class (no-op if absent).
    fn class_list_remove(&self, class: &str);

    /// Returns an attribute value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Returns the input value.
    fn value(&self) -> String;

    /// Returns the checked state of a checkbox input.
    fn checked(&self) -> bool;

    /// Sets the checked state.
    fn set_checked(&self, checked: bool);

    /// Returns the disabled state.
    fn disabled(&self) -> bool;

    /// Sets the disabled state.
    fn set_disabled(&self, disabled: bool);

    /// Returns the element's text content.
    fn text_content(&self) -> String;

    /// Replaces the element's children with the given markup.
    fn set_inner_html(&self, html: &str);

    /// Registers an event listener.
    fn add_event_listener(&self, kind: EventKind, handler: EventHandler);

    /// Moves input focus to the element.
    fn focus(&self);
}

/// A handle to a live document and its host facilities.
///
/// Clone-cheap (handle semantics): hydration clones the handle into event
/// handlers the way browser code closes over `document`.
pub trait Dom: Clone + 'static {
    /// The element type this document yields.
    type Element: Element;

    /// Returns the first element matching the selector, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Returns all elements matching the selector, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Returns the element with the given id, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns the location pathname.
    fn pathname(&self) -> String;

    /// Navigates to the given URL.
    fn navigate(&self, url: &str);

    /// Shows a blocking confirm prompt and returns the user's answer.
    fn confirm(&self, message: &str) -> bool;

    /// Writes text to the clipboard.
    fn copy_to_clipboard(&self, text: &str);

    /// Schedules a one-shot callback; fire-and-forget, no cancellation.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}
