//! The mounted button component.
//!
//! [`Button`] ties the pieces together for one control instance: it resolves
//! props against the scopes, owns the loading state machine, wraps the click
//! handler in the interaction guard and keeps exactly one root element mounted
//! through the [`Renderer`].
//!
//! # Timers
//!
//! A delayed loading intent arms a timer on the [`SharedTimerManager`] passed
//! to [`Button::mount`]. The host drives the manager and offers every expired
//! id to its buttons:
//!
//! ```ignore
//! for id in timers.process_expired() {
//!     for button in &mut buttons {
//!         if button.handle_timer(id, &mut renderer) {
//!             break;
//!         }
//!     }
//! }
//! ```

use std::sync::Arc;

use horizon_cascade_core::{PerfSpan, Scopes, SharedTimerManager, TimerId};

use crate::diagnostics::Diagnostics;
use crate::element_ref::{ElementHandle, ElementRef};
use crate::guard::{guard, ClickEvent, ClickOutcome};
use crate::loading::{LoadingState, LoadingStateMachine};
use crate::props::ButtonProps;
use crate::render::Renderer;
use crate::resolver::{resolve, ButtonSpec};
use crate::variant::{dispatch, RootElement};

/// One mounted button.
pub struct Button {
    props: ButtonProps,
    spec: ButtonSpec,
    loading: LoadingStateMachine,
    root: RootElement,
    element: ElementHandle,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Button {
    /// Resolve `props`, mount the root element and run the ref contract.
    pub fn mount(
        props: ButtonProps,
        scopes: &Scopes,
        timers: SharedTimerManager,
        diagnostics: Arc<dyn Diagnostics>,
        renderer: &mut dyn Renderer,
    ) -> Self {
        let _span = PerfSpan::new("button_mount");
        let loading = LoadingStateMachine::new(props.loading, timers);
        let spec = resolve(&props, scopes, diagnostics.as_ref()).with_loading(loading.is_loading());
        let root = render(&props, &spec);
        let element = renderer.mount(&root);
        if let Some(element_ref) = &props.element_ref {
            element_ref.attach(element);
        }

        tracing::debug!(
            target: "horizon_cascade_button::button",
            element = element.id(),
            kind = ?element.kind(),
            "button mounted"
        );

        Self {
            props,
            spec,
            loading,
            root,
            element,
            diagnostics,
        }
    }

    /// Re-render with new props and the scopes visible at this render.
    ///
    /// The ref contract only runs when the root element is created. A plain
    /// update keeps the element, so a replacement callback ref is stored but
    /// not invoked; a replacement slot is pointed at the existing element.
    pub fn update(&mut self, props: ButtonProps, scopes: &Scopes, renderer: &mut dyn Renderer) {
        let _span = PerfSpan::new("button_update");
        self.loading.set_intent(props.loading);
        let spec = resolve(&props, scopes, self.diagnostics.as_ref())
            .with_loading(self.loading.is_loading());
        let root = render(&props, &spec);

        if root.kind() != self.root.kind() {
            tracing::debug!(
                target: "horizon_cascade_button::button",
                from = ?self.root.kind(),
                to = ?root.kind(),
                "variant changed, remounting"
            );
            if let Some(old_ref) = &self.props.element_ref {
                old_ref.detach();
            }
            renderer.unmount(self.element);
            self.element = renderer.mount(&root);
            if let Some(new_ref) = &props.element_ref {
                new_ref.attach(self.element);
            }
        } else {
            renderer.update(self.element, &root);
            swap_ref(self.props.element_ref.as_ref(), props.element_ref.as_ref(), self.element);
        }

        self.props = props;
        self.spec = spec;
        self.root = root;
    }

    /// Deliver a fired timer.
    ///
    /// Returns `true` if the timer belonged to this button; the button then
    /// re-renders with its new loading state.
    pub fn handle_timer(&mut self, id: TimerId, renderer: &mut dyn Renderer) -> bool {
        if !self.loading.handle_timer(id) {
            return false;
        }
        self.spec = self.spec.clone().with_loading(self.loading.is_loading());
        self.root = render(&self.props, &self.spec);
        renderer.update(self.element, &self.root);
        true
    }

    /// Deliver a click to the root element.
    ///
    /// The event is passed to the guard as built by the host, including its
    /// `target`.
    pub fn click(&self, event: &mut ClickEvent) -> ClickOutcome {
        self.root.on_click().invoke(event)
    }

    /// Remove the root element, clear a slot ref and cancel any pending timer.
    pub fn unmount(mut self, renderer: &mut dyn Renderer) {
        self.loading.cancel();
        if let Some(element_ref) = &self.props.element_ref {
            element_ref.detach();
        }
        renderer.unmount(self.element);
        tracing::debug!(
            target: "horizon_cascade_button::button",
            element = self.element.id(),
            "button unmounted"
        );
    }

    /// The spec of the last render.
    pub fn spec(&self) -> &ButtonSpec {
        &self.spec
    }

    /// The props of the last render.
    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// The root element of the last render.
    pub fn root(&self) -> &RootElement {
        &self.root
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading.state()
    }

    /// The loading state machine, for connecting to its signals.
    pub fn loading(&self) -> &LoadingStateMachine {
        &self.loading
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.loading.pending_timer()
    }

    /// The mounted root element.
    pub fn element(&self) -> ElementHandle {
        self.element
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("spec", &self.spec)
            .field("loading", &self.loading)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);

fn render(props: &ButtonProps, spec: &ButtonSpec) -> RootElement {
    dispatch(spec, guard(props.on_click.clone(), spec.disabled, spec.loading))
}

fn swap_ref(old: Option<&ElementRef>, new: Option<&ElementRef>, element: ElementHandle) {
    match (old, new) {
        (Some(old), Some(new)) if old.same_target(new) => {}
        (old, new) => {
            if let Some(old) = old {
                old.detach();
            }
            if let Some(new) = new {
                new.rebind(element);
            }
        }
    }
}
