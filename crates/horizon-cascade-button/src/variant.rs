//! Variant selection and dispatch to the root element.

use std::collections::BTreeMap;

use horizon_cascade_core::scope::{Direction, SizeType};

use crate::element_ref::ElementKind;
use crate::guard::GuardedClick;
use crate::props::{ButtonHtmlType, ButtonProps, ButtonShape, ButtonType, Child};
use crate::resolver::{ButtonSpec, IconSlot};

/// The rendering shape of a button, decided once per resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonVariant {
    /// A hyperlink-like element.
    Anchor { href: String, target: Option<String> },
    /// A press-button element.
    Native { html_type: ButtonHtmlType },
}

impl ButtonVariant {
    /// A non-empty `href` selects the anchor variant; anything else is native.
    pub fn select(props: &ButtonProps) -> Self {
        match props.href.as_deref() {
            Some(href) if !href.is_empty() => ButtonVariant::Anchor {
                href: href.to_owned(),
                target: props.target.clone(),
            },
            _ => ButtonVariant::Native {
                html_type: props.html_type.unwrap_or_default(),
            },
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, ButtonVariant::Anchor { .. })
    }

    pub fn is_native(&self) -> bool {
        matches!(self, ButtonVariant::Native { .. })
    }

    /// The kind of element this variant renders to.
    pub fn kind(&self) -> ElementKind {
        match self {
            ButtonVariant::Anchor { .. } => ElementKind::Anchor,
            ButtonVariant::Native { .. } => ElementKind::Button,
        }
    }
}

/// Attributes shared by both root element kinds.
#[derive(Debug, Clone)]
pub struct ElementProps {
    pub prefix_cls: String,
    pub class_name: Option<String>,
    pub button_type: ButtonType,
    pub shape: ButtonShape,
    pub size: SizeType,
    pub disabled: bool,
    pub loading: bool,
    pub ghost: bool,
    pub danger: bool,
    pub block: bool,
    pub direction: Direction,
    pub two_cjk_chars: bool,
    pub icon: IconSlot,
    pub children: Vec<Child>,
    /// Forwarded verbatim.
    pub attrs: BTreeMap<String, String>,
    pub on_click: GuardedClick,
}

/// A hyperlink-like root element.
#[derive(Debug, Clone)]
pub struct AnchorElement {
    pub href: String,
    pub target: Option<String>,
    pub props: ElementProps,
}

/// A press-button root element.
#[derive(Debug, Clone)]
pub struct NativeElement {
    pub html_type: ButtonHtmlType,
    pub props: ElementProps,
}

/// The single root element a button renders.
#[derive(Debug, Clone)]
pub enum RootElement {
    Anchor(AnchorElement),
    Native(NativeElement),
}

impl RootElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            RootElement::Anchor(_) => ElementKind::Anchor,
            RootElement::Native(_) => ElementKind::Button,
        }
    }

    /// The attributes common to both kinds.
    pub fn props(&self) -> &ElementProps {
        match self {
            RootElement::Anchor(anchor) => &anchor.props,
            RootElement::Native(native) => &native.props,
        }
    }

    /// The guarded click handler attached to the element.
    pub fn on_click(&self) -> &GuardedClick {
        &self.props().on_click
    }
}

/// Route a resolved spec and its guarded handler into the element for its
/// variant.
pub fn dispatch(spec: &ButtonSpec, on_click: GuardedClick) -> RootElement {
    let props = ElementProps {
        prefix_cls: spec.prefix_cls.clone(),
        class_name: spec.class_name.clone(),
        button_type: spec.button_type,
        shape: spec.shape,
        size: spec.size,
        disabled: spec.disabled,
        loading: spec.loading,
        ghost: spec.ghost,
        danger: spec.danger,
        block: spec.block,
        direction: spec.direction,
        two_cjk_chars: spec.two_cjk_chars,
        icon: spec.icon_slot(),
        children: spec.children.clone(),
        attrs: spec.attrs.clone(),
        on_click,
    };
    match &spec.variant {
        ButtonVariant::Anchor { href, target } => RootElement::Anchor(AnchorElement {
            href: href.clone(),
            target: target.clone(),
            props,
        }),
        ButtonVariant::Native { html_type } => RootElement::Native(NativeElement {
            html_type: *html_type,
            props,
        }),
    }
}
