//! Button state resolution for Horizon Cascade.
//!
//! This crate decides, for every render of a button, which ambient and local
//! settings apply and gates clicks behind the derived state:
//!
//! - **Resolution**: explicit props merged with the size, group size, disabled
//!   and configuration scopes into a [`ButtonSpec`]
//! - **Loading**: a state machine with cancellable delayed activation
//! - **Interaction guard**: click handlers suppressed while disabled or loading
//! - **Variant dispatch**: anchor or press-button root element, chosen once
//! - **Groups**: a boundary that sizes every button inside it
//!
//! Rendering itself is left to a host [`Renderer`].
//!
//! # Example
//!
//! ```
//! use horizon_cascade_button::prelude::*;
//! use horizon_cascade_core::scope::{Scopes, SizeType};
//!
//! let scopes = Scopes::root().with_disabled(true);
//! let group = ButtonGroup::new().with_size(SizeType::Small);
//!
//! let spec = group.provide(&scopes, |scopes| {
//!     let props = ButtonProps::new().with_child(Child::text("OK"));
//!     resolve(&props, scopes, &CollectingDiagnostics::new())
//! });
//!
//! assert_eq!(spec.size, SizeType::Small);
//! assert!(spec.disabled);
//! assert!(spec.variant.is_native());
//! ```

pub mod button;
pub mod diagnostics;
pub mod element_ref;
pub mod group;
pub mod guard;
pub mod loading;
pub mod props;
pub mod render;
pub mod resolver;
pub mod spacing;
pub mod variant;

pub use button::Button;
pub use diagnostics::{CollectingDiagnostics, Diagnostic, Diagnostics, TracingDiagnostics};
pub use element_ref::{ElementHandle, ElementKind, ElementRef, ElementSlot};
pub use group::{ButtonGroup, GroupSpec};
pub use guard::{guard, ClickEvent, ClickHandler, ClickOutcome, GuardedClick};
pub use loading::{LoadingIntent, LoadingState, LoadingStateMachine};
pub use props::{ButtonHtmlType, ButtonProps, ButtonShape, ButtonType, Child, Icon, NodeId};
pub use render::Renderer;
pub use resolver::{resolve, ButtonSpec, IconSlot};
pub use variant::{dispatch, ButtonVariant, RootElement};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::button::Button;
    pub use crate::diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
    pub use crate::element_ref::{ElementHandle, ElementKind, ElementRef, ElementSlot};
    pub use crate::group::ButtonGroup;
    pub use crate::guard::{ClickEvent, ClickOutcome};
    pub use crate::loading::{LoadingIntent, LoadingState};
    pub use crate::props::{ButtonHtmlType, ButtonProps, ButtonShape, ButtonType, Child, Icon};
    pub use crate::render::Renderer;
    pub use crate::resolver::{resolve, ButtonSpec, IconSlot};
    pub use crate::variant::{ButtonVariant, RootElement};
}
