//! An in-memory document for testing hydration without a browser.
//!
//! Implements just enough of the [`Dom`]/[`Element`] surface for the
//! behaviors in this crate: class, id and `[name='…']` selector matching,
//! listener registration with synthetic `click`/`change` dispatch, and
//! recorded host calls (navigations, confirm prompts, clipboard writes)
//! plus manually drained timers. Downstream crates can use it to test
//! their own hydration wiring.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{Dom, Element, Event, EventHandler, EventKind};

/// A fake document.
#[derive(Clone)]
pub struct FakeDom {
    inner: Rc<RefCell<DomState>>,
}

struct DomState {
    elements: Vec<FakeElement>,
    pathname: String,
    confirm_answer: bool,
    confirms: Vec<String>,
    navigations: Vec<String>,
    clipboard: Vec<String>,
    timers: Vec<Box<dyn FnOnce()>>,
}

impl FakeDom {
    /// Creates an empty document at the given location pathname.
    ///
    /// Confirm prompts answer "yes" until changed with
    /// [`FakeDom::set_confirm_answer`].
    pub fn new(pathname: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DomState {
                elements: Vec::new(),
                pathname: pathname.to_string(),
                confirm_answer: true,
                confirms: Vec::new(),
                navigations: Vec::new(),
                clipboard: Vec::new(),
                timers: Vec::new(),
            })),
        }
    }

    /// Inserts an element and returns a handle to it.
    pub fn insert(&self, element: FakeElement) -> FakeElement {
        self.inner.borrow_mut().elements.push(element.clone());
        element
    }

    /// Sets the answer future confirm prompts return.
    pub fn set_confirm_answer(&self, answer: bool) {
        self.inner.borrow_mut().confirm_answer = answer;
    }

    /// Returns every confirm message shown so far.
    pub fn confirms(&self) -> Vec<String> {
        self.inner.borrow().confirms.clone()
    }

    /// Returns every navigation performed so far.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }

    /// Returns every clipboard write so far.
    pub fn clipboard(&self) -> Vec<String> {
        self.inner.borrow().clipboard.clone()
    }

    /// Returns the number of scheduled, not yet drained timers.
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Runs and drains every pending timer, in scheduling order.
    pub fn run_timers(&self) {
        let timers = std::mem::take(&mut self.inner.borrow_mut().timers);
        for timer in timers {
            timer();
        }
    }

    fn matching(&self, selector: &str) -> Vec<FakeElement> {
        self.inner
            .borrow()
            .elements
            .iter()
            .filter(|el| el.matches(selector))
            .cloned()
            .collect()
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.matching(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        self.matching(selector)
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.query_selector(&format!("#{id}"))
    }

    fn pathname(&self) -> String {
        self.inner.borrow().pathname.clone()
    }

    fn navigate(&self, url: &str) {
        self.inner.borrow_mut().navigations.push(url.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.inner.borrow_mut();
        state.confirms.push(message.to_string());
        state.confirm_answer
    }

    fn copy_to_clipboard(&self, text: &str) {
        self.inner.borrow_mut().clipboard.push(text.to_string());
    }

    fn set_timeout(&self, _delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.inner.borrow_mut().timers.push(callback);
    }
}

/// A fake element handle; clones refer to the same element.
#[derive(Clone)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

#[derive(Default)]
struct ElementState {
    tag: String,
    id: Option<String>,
    name: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    value: String,
    text: String,
    inner_html: String,
    checked: bool,
    disabled: bool,
    focused: bool,
    listeners: Vec<(EventKind, EventHandler)>,
}

impl FakeElement {
    /// Creates an element with the given tag name.
    pub fn new(tag: &str) -> Self {
        let state = ElementState {
            tag: tag.to_string(),
            ..ElementState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.state.borrow_mut().id = Some(id.to_string());
        self
    }

    /// Sets the `name` attribute.
    #[must_use]
    pub fn name(self, name: &str) -> Self {
        self.state.borrow_mut().name = Some(name.to_string());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.state.borrow_mut().classes.push(class.to_string());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the input value.
    #[must_use]
    pub fn value(self, value: &str) -> Self {
        self.state.borrow_mut().value = value.to_string();
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.state.borrow_mut().text = text.to_string();
        self
    }

    /// Starts the element disabled.
    #[must_use]
    pub fn start_disabled(self) -> Self {
        self.state.borrow_mut().disabled = true;
        self
    }

    /// Dispatches a click event and returns it.
    pub fn click(&self) -> Event {
        self.dispatch(EventKind::Click)
    }

    /// Dispatches a change event and returns it.
    pub fn change(&self) -> Event {
        self.dispatch(EventKind::Change)
    }

    /// Returns the number of listeners registered for an event kind.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Returns the checked state (non-trait alias for assertions).
    pub fn is_checked(&self) -> bool {
        self.state.borrow().checked
    }

    /// Returns whether the element holds input focus.
    pub fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    /// Returns the markup last written with `set_inner_html`.
    pub fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    /// Returns the tag name.
    pub fn tag(&self) -> String {
        self.state.borrow().tag.clone()
    }

    fn dispatch(&self, kind: EventKind) -> Event {
        // Clone the handlers out first: they may re-enter this element.
        let handlers: Vec<EventHandler> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, h)| h.clone())
            .collect();

        let event = Event::new();
        for handler in handlers {
            handler(&event);
        }
        event
    }

    fn matches(&self, selector: &str) -> bool {
        let state = self.state.borrow();

        if let Some(class) = selector.strip_prefix('.') {
            return state.classes.iter().any(|c| c == class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return state.id.as_deref() == Some(id);
        }
        if let Some(rest) = selector.strip_prefix("[name='") {
            if let Some(name) = rest.strip_suffix("']") {
                return state.name.as_deref() == Some(name);
            }
        }
        false
    }
}

impl Element for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn class_list_add(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn class_list_remove(&self, class: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn checked(&self) -> bool {
        self.state.borrow().checked
    }

    fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().checked = checked;
    }

    fn disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn text_content(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.state.borrow_mut().inner_html = html.to_string();
    }

    fn add_event_listener(&self, kind: EventKind, handler: EventHandler) {
        self.state.borrow_mut().listeners.push((kind, handler));
    }

    fn focus(&self) {
        self.state.borrow_mut().focused = true;
    }
}
