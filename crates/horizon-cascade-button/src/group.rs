//! Button groups.
//!
//! A group is a boundary for the group size cascade: buttons inside it take
//! the group's size unless they set their own.

use horizon_cascade_core::scope::{Direction, Scopes, SizeType};

/// A group of buttons sharing a size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    pub size: Option<SizeType>,
    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
}

/// The resolved description of a group's container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    /// Component prefix, e.g. `ant-btn-group`.
    pub prefix_cls: String,
    pub class_name: Option<String>,
    pub size: Option<SizeType>,
    pub direction: Direction,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: SizeType) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Resolve the group's container against the scopes it sits in.
    pub fn resolve(&self, scopes: &Scopes) -> GroupSpec {
        let config = scopes.config();
        GroupSpec {
            prefix_cls: config.component_prefix("btn-group", self.prefix_cls.as_deref()),
            class_name: self.class_name.clone(),
            size: self.size,
            direction: config.direction(),
        }
    }

    /// Run `children` inside the group.
    ///
    /// The group size always replaces an enclosing group's size, even when
    /// this group leaves it unset.
    pub fn provide<R>(&self, scopes: &Scopes, children: impl FnOnce(&Scopes) -> R) -> R {
        tracing::trace!(target: "horizon_cascade_button::group", size = ?self.size, "button group");
        scopes.provide_group_size(self.size, children)
    }
}
