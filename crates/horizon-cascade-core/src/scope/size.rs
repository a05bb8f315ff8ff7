//! Component size cascades.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cascade::{Cascade, CascadeValue};

/// A concrete component size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeType {
    Small,
    /// The library default.
    #[default]
    Middle,
    Large,
}

impl SizeType {
    /// The lowercase name of the size.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeType::Small => "small",
            SizeType::Middle => "middle",
            SizeType::Large => "large",
        }
    }
}

impl fmt::Display for SizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The general ambient size. `None` is "unset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeScope(pub Option<SizeType>);

impl CascadeValue for SizeScope {
    fn root() -> Self {
        SizeScope(None)
    }

    /// A boundary that declares no size keeps the inherited one.
    fn compose(inherited: &Self, provided: Self) -> Self {
        SizeScope(provided.0.or(inherited.0))
    }
}

/// The size set by the nearest enclosing button group, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSizeScope(pub Option<SizeType>);

impl CascadeValue for GroupSizeScope {
    fn root() -> Self {
        GroupSizeScope(None)
    }
}

/// The general size cascade.
pub type SizeCascade = Cascade<SizeScope>;

/// The button group size cascade.
pub type GroupSizeCascade = Cascade<GroupSizeScope>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_unset_at_root() {
        assert_eq!(SizeCascade::root().read(), &SizeScope(None));
    }

    #[test]
    fn size_override_replaces_inherited() {
        let cascade = SizeCascade::root()
            .nested(SizeScope(Some(SizeType::Large)))
            .nested(SizeScope(Some(SizeType::Small)));
        assert_eq!(cascade.read().0, Some(SizeType::Small));
    }

    #[test]
    fn size_boundary_without_value_inherits() {
        let cascade = SizeCascade::root()
            .nested(SizeScope(Some(SizeType::Large)))
            .nested(SizeScope(None));
        assert_eq!(cascade.read().0, Some(SizeType::Large));
    }

    #[test]
    fn group_boundary_always_replaces() {
        let cascade = GroupSizeCascade::root()
            .nested(GroupSizeScope(Some(SizeType::Large)))
            .nested(GroupSizeScope(None));
        assert_eq!(cascade.read().0, None);
    }

    #[test]
    fn size_names() {
        assert_eq!(SizeType::Small.to_string(), "small");
        assert_eq!(SizeType::default(), SizeType::Middle);
    }
}
