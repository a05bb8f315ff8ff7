//! The ambient configuration store.

use serde::{Deserialize, Serialize};

use super::cascade::{Cascade, CascadeValue};

/// The name prefix used when no boundary overrides it.
pub const DEFAULT_PREFIX_CLS: &str = "ant";

/// Text direction of a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Whether this is right-to-left.
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Configuration visible to every control below a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigScope {
    prefix_cls: String,
    direction: Direction,
    auto_insert_space: bool,
}

impl ConfigScope {
    /// Create a scope value.
    pub fn new(prefix_cls: impl Into<String>, direction: Direction, auto_insert_space: bool) -> Self {
        Self {
            prefix_cls: prefix_cls.into(),
            direction,
            auto_insert_space,
        }
    }

    /// The root name prefix.
    pub fn prefix_cls(&self) -> &str {
        &self.prefix_cls
    }

    /// Text direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a space is inserted between two CJK characters in button text.
    pub fn auto_insert_space(&self) -> bool {
        self.auto_insert_space
    }

    /// Resolve the name prefix for a component.
    ///
    /// An explicit `custom` prefix wins. Otherwise the component suffix is
    /// appended to the root prefix, or the root prefix is used alone when
    /// `suffix` is empty.
    pub fn component_prefix(&self, suffix: &str, custom: Option<&str>) -> String {
        match custom {
            Some(custom) => custom.to_owned(),
            None if suffix.is_empty() => self.prefix_cls.clone(),
            None => format!("{}-{}", self.prefix_cls, suffix),
        }
    }

    /// Builder: replace the root prefix.
    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = prefix_cls.into();
        self
    }

    /// Builder: replace the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder: replace the auto-insert-space rule.
    pub fn with_auto_insert_space(mut self, auto_insert_space: bool) -> Self {
        self.auto_insert_space = auto_insert_space;
        self
    }
}

impl Default for ConfigScope {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_CLS, Direction::Ltr, true)
    }
}

impl CascadeValue for ConfigScope {
    fn root() -> Self {
        Self::default()
    }
}

/// The ambient configuration cascade.
pub type ScopeStore = Cascade<ConfigScope>;
