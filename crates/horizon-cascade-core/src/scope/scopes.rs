//! The bundle of cascades threaded through a render.

use super::config::{ConfigScope, ScopeStore};
use super::disabled::{DisabledCascade, DisabledScope};
use super::size::{GroupSizeCascade, GroupSizeScope, SizeCascade, SizeScope, SizeType};

/// Every ambient value visible at one point of the tree.
///
/// `Scopes` is passed by reference down the render call chain. Boundaries
/// derive a new `Scopes` for their subtree with the `with_*` methods (or the
/// matching `provide_*` methods, which run the subtree directly); nothing is
/// ever written in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scopes {
    config: ScopeStore,
    size: SizeCascade,
    disabled: DisabledCascade,
    group_size: GroupSizeCascade,
}

impl Scopes {
    /// The scopes seen outside of every boundary.
    pub fn root() -> Self {
        Self::default()
    }

    /// The configuration cascade.
    pub fn config_cascade(&self) -> &ScopeStore {
        &self.config
    }

    /// The general size cascade.
    pub fn size_cascade(&self) -> &SizeCascade {
        &self.size
    }

    /// The disabled cascade.
    pub fn disabled_cascade(&self) -> &DisabledCascade {
        &self.disabled
    }

    /// The button group size cascade.
    pub fn group_size_cascade(&self) -> &GroupSizeCascade {
        &self.group_size
    }

    /// The configuration visible here.
    pub fn config(&self) -> &ConfigScope {
        self.config.read()
    }

    /// The general size visible here, if any.
    pub fn size(&self) -> Option<SizeType> {
        self.size.read().0
    }

    /// Whether an enclosing boundary disabled this subtree.
    pub fn disabled(&self) -> bool {
        self.disabled.read().0
    }

    /// The enclosing group's size, if any.
    pub fn group_size(&self) -> Option<SizeType> {
        self.group_size.read().0
    }

    /// Scopes with a replaced configuration.
    pub fn with_config(&self, config: ConfigScope) -> Self {
        self.map(|s| s.config = s.config.nested(config))
    }

    /// Scopes with a size boundary. `None` keeps the inherited size.
    pub fn with_size(&self, size: Option<SizeType>) -> Self {
        self.map(|s| s.size = s.size.nested(SizeScope(size)))
    }

    /// Scopes with a disabled boundary, OR-ed with the inherited flag.
    pub fn with_disabled(&self, disabled: bool) -> Self {
        self.map(|s| s.disabled = s.disabled.nested(DisabledScope(disabled)))
    }

    /// Scopes inside a button group.
    pub fn with_group_size(&self, size: Option<SizeType>) -> Self {
        self.map(|s| s.group_size = s.group_size.nested(GroupSizeScope(size)))
    }

    /// Run `subtree` under a configuration boundary.
    pub fn provide_config<R>(&self, config: ConfigScope, subtree: impl FnOnce(&Self) -> R) -> R {
        subtree(&self.with_config(config))
    }

    /// Run `subtree` under a size boundary.
    pub fn provide_size<R>(&self, size: Option<SizeType>, subtree: impl FnOnce(&Self) -> R) -> R {
        subtree(&self.with_size(size))
    }

    /// Run `subtree` under a disabled boundary.
    pub fn provide_disabled<R>(&self, disabled: bool, subtree: impl FnOnce(&Self) -> R) -> R {
        subtree(&self.with_disabled(disabled))
    }

    /// Run `subtree` under a group size boundary.
    pub fn provide_group_size<R>(
        &self,
        size: Option<SizeType>,
        subtree: impl FnOnce(&Self) -> R,
    ) -> R {
        subtree(&self.with_group_size(size))
    }

    fn map(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        f(&mut next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::Direction;

    #[test]
    fn root_values() {
        let scopes = Scopes::root();
        assert_eq!(scopes.config().prefix_cls(), "ant");
        assert_eq!(scopes.size(), None);
        assert!(!scopes.disabled());
        assert_eq!(scopes.group_size(), None);
    }

    #[test]
    fn cascades_are_independent() {
        let scopes = Scopes::root()
            .with_size(Some(SizeType::Large))
            .with_disabled(true);

        assert_eq!(scopes.size(), Some(SizeType::Large));
        assert!(scopes.disabled());
        assert_eq!(scopes.group_size(), None);
        assert_eq!(scopes.config(), &ConfigScope::default());
        assert_eq!(scopes.size_cascade().depth(), 1);
        assert_eq!(scopes.group_size_cascade().depth(), 0);
    }

    #[test]
    fn provide_does_not_leak_upward() {
        let root = Scopes::root();
        let inner_direction = root.provide_config(
            ConfigScope::default().with_direction(Direction::Rtl),
            |scopes| scopes.config().direction(),
        );

        assert_eq!(inner_direction, Direction::Rtl);
        assert_eq!(root.config().direction(), Direction::Ltr);
    }

    #[test]
    fn nested_providers() {
        let disabled = Scopes::root().provide_disabled(true, |outer| {
            outer.provide_disabled(false, |inner| {
                inner.provide_group_size(Some(SizeType::Small), |group| {
                    (group.disabled(), group.group_size())
                })
            })
        });
        assert_eq!(disabled, (true, Some(SizeType::Small)));
    }
}
