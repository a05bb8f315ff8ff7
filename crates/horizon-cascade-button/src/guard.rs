//! Click events and the interaction guard.
//!
//! [`guard`] wraps the user's click handler. While the button is disabled or
//! loading the wrapped handler prevents the default action and never reaches
//! the user's handler; otherwise it forwards the event untouched.

use std::fmt;
use std::sync::Arc;

use crate::element_ref::ElementHandle;

/// A user click handler.
pub type ClickHandler = Arc<dyn Fn(&mut ClickEvent) + Send + Sync>;

/// A click delivered to a button's root element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickEvent {
    /// The element that received the click.
    pub target: Option<ElementHandle>,
    /// Pointer position relative to the element.
    pub x: f32,
    pub y: f32,
    /// Consecutive click count.
    pub detail: u32,
    default_prevented: bool,
}

impl ClickEvent {
    /// A single click at the given position.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            target: None,
            x,
            y,
            detail: 1,
            default_prevented: false,
        }
    }

    /// Builder: set the target element.
    pub fn with_target(mut self, target: ElementHandle) -> Self {
        self.target = Some(target);
        self
    }

    /// Stop the platform's default action for this click (following a link,
    /// submitting a form).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was prevented.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The user's handler was called.
    Forwarded,
    /// The button was busy or disabled; the default action was prevented.
    Suppressed,
    /// The click was allowed but there is no handler.
    Unhandled,
}

/// A click handler wrapped by [`guard`].
#[derive(Clone)]
pub struct GuardedClick {
    handler: Option<ClickHandler>,
    disabled: bool,
    loading: bool,
}

impl GuardedClick {
    /// Whether clicks are currently suppressed.
    pub fn is_suppressing(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether a user handler is attached.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Handle a click.
    pub fn invoke(&self, event: &mut ClickEvent) -> ClickOutcome {
        if self.is_suppressing() {
            event.prevent_default();
            tracing::trace!(
                target: "horizon_cascade_button::guard",
                disabled = self.disabled,
                loading = self.loading,
                "click suppressed"
            );
            return ClickOutcome::Suppressed;
        }
        match &self.handler {
            Some(handler) => {
                handler(event);
                ClickOutcome::Forwarded
            }
            None => ClickOutcome::Unhandled,
        }
    }
}

impl fmt::Debug for GuardedClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedClick")
            .field("has_handler", &self.handler.is_some())
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .finish()
    }
}

/// Wrap `handler` so it only runs while the button is enabled and idle.
pub fn guard(handler: Option<ClickHandler>, disabled: bool, loading: bool) -> GuardedClick {
    GuardedClick {
        handler,
        disabled,
        loading,
    }
}
