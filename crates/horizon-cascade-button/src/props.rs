//! The explicit property surface of a button.
//!
//! Every field of [`ButtonProps`] is optional in spirit: anything left unset
//! falls through to the ambient scopes or to the library default when the
//! props are resolved.
//!
//! # Example
//!
//! ```
//! use horizon_cascade_button::props::{ButtonProps, ButtonType, Child};
//! use horizon_cascade_button::LoadingIntent;
//! use std::time::Duration;
//!
//! let props = ButtonProps::new()
//!     .with_type(ButtonType::Primary)
//!     .with_loading(Duration::from_millis(300))
//!     .with_child(Child::text("Save"))
//!     .with_on_click(|event| println!("clicked {} times", event.detail));
//!
//! assert_eq!(props.loading, LoadingIntent::Delayed(Duration::from_millis(300)));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use horizon_cascade_core::scope::SizeType;

use crate::element_ref::ElementRef;
use crate::guard::{ClickEvent, ClickHandler};
use crate::loading::LoadingIntent;

/// Visual type of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    Link,
    Text,
    Primary,
    Dashed,
    #[default]
    Default,
    Ghost,
}

impl ButtonType {
    /// Link and text buttons are drawn without a border.
    pub fn is_unbordered(self) -> bool {
        matches!(self, ButtonType::Link | ButtonType::Text)
    }

    /// The lowercase name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Link => "link",
            ButtonType::Text => "text",
            ButtonType::Primary => "primary",
            ButtonType::Dashed => "dashed",
            ButtonType::Default => "default",
            ButtonType::Ghost => "ghost",
        }
    }
}

/// Outline shape of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonShape {
    #[default]
    Default,
    Circle,
    Round,
}

/// The `type` attribute of a press-button element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonHtmlType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonHtmlType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonHtmlType::Button => "button",
            ButtonHtmlType::Submit => "submit",
            ButtonHtmlType::Reset => "reset",
        }
    }
}

/// Opaque handle to a node owned by the rendering runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// An icon shown next to the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// A glyph from the icon set, rendered by the icon collaborator.
    Glyph(String),
    /// An arbitrary node.
    Node(NodeId),
    /// Bare text standing in for an icon.
    Text(String),
}

/// One child of the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A text run.
    Text(String),
    /// A node owned by the rendering runtime.
    Node(NodeId),
}

impl Child {
    /// A text child.
    pub fn text(text: impl Into<String>) -> Self {
        Child::Text(text.into())
    }

    /// The text of a text child.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            Child::Node(_) => None,
        }
    }
}

/// The explicit properties of one button.
#[derive(Clone, Default)]
pub struct ButtonProps {
    pub button_type: Option<ButtonType>,
    pub shape: Option<ButtonShape>,
    /// Unset falls through to the group size, then the ambient size.
    pub size: Option<SizeType>,
    /// Unset falls through to the ambient disabled flag.
    pub disabled: Option<bool>,
    pub loading: LoadingIntent,
    pub ghost: bool,
    pub danger: bool,
    pub block: bool,
    pub icon: Option<Icon>,
    /// Press-button variant only.
    pub html_type: Option<ButtonHtmlType>,
    /// A non-empty `href` selects the anchor variant.
    pub href: Option<String>,
    /// Anchor variant only.
    pub target: Option<String>,
    pub class_name: Option<String>,
    /// Overrides the ambient name prefix for this button.
    pub prefix_cls: Option<String>,
    pub children: Vec<Child>,
    pub element_ref: Option<ElementRef>,
    pub on_click: Option<ClickHandler>,
    /// Unrecognized attributes, forwarded verbatim to the root element.
    pub attrs: BTreeMap<String, String>,
}

impl ButtonProps {
    /// Empty props: every value falls through to its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn with_shape(mut self, shape: ButtonShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_size(mut self, size: SizeType) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Set the loading intent from a `bool`, a delay, or a [`LoadingIntent`].
    pub fn with_loading(mut self, loading: impl Into<LoadingIntent>) -> Self {
        self.loading = loading.into();
        self
    }

    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }

    pub fn with_danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    pub fn with_block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_html_type(mut self, html_type: ButtonHtmlType) -> Self {
        self.html_type = Some(html_type);
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_ref(mut self, element_ref: ElementRef) -> Self {
        self.element_ref = Some(element_ref);
        self
    }

    /// Set the click handler.
    pub fn with_on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ClickEvent) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Forward an attribute verbatim to the root element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("button_type", &self.button_type)
            .field("shape", &self.shape)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .field("ghost", &self.ghost)
            .field("danger", &self.danger)
            .field("block", &self.block)
            .field("icon", &self.icon)
            .field("html_type", &self.html_type)
            .field("href", &self.href)
            .field("target", &self.target)
            .field("class_name", &self.class_name)
            .field("prefix_cls", &self.prefix_cls)
            .field("children", &self.children)
            .field("element_ref", &self.element_ref)
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn"))
            .field("attrs", &self.attrs)
            .finish()
    }
}
