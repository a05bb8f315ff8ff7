//! Generic tree-scoped value with override-by-subtree semantics.

use std::fmt;

/// A value that can be carried by a [`Cascade`].
///
/// Implementors decide what the global default is and how a boundary's
/// provided value combines with the value inherited from above.
pub trait CascadeValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// The value visible when no boundary encloses the reader.
    fn root() -> Self;

    /// The value a boundary makes visible to its subtree.
    ///
    /// The default replaces the inherited value outright.
    fn compose(inherited: &Self, provided: Self) -> Self {
        let _ = inherited;
        provided
    }
}

/// One level of an ambient, tree-scoped value.
///
/// A `Cascade` is immutable. Boundaries create a nested cascade with
/// [`nested`](Self::nested) (or run a subtree with [`provide`](Self::provide))
/// and pass it down the render call chain; readers call [`read`](Self::read).
#[derive(Clone, PartialEq)]
pub struct Cascade<V> {
    value: V,
    depth: u32,
}

impl<V: CascadeValue> Cascade<V> {
    /// The outermost cascade, holding the global default.
    pub fn root() -> Self {
        Self {
            value: V::root(),
            depth: 0,
        }
    }

    /// The value visible at this point of the tree.
    pub fn read(&self) -> &V {
        &self.value
    }

    /// How many boundaries enclose this point.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Create the cascade seen by a boundary's subtree.
    pub fn nested(&self, provided: V) -> Self {
        let value = V::compose(&self.value, provided);
        crate::cascade_trace!(
            scope = std::any::type_name::<V>(),
            depth = self.depth + 1,
            ?value,
            "cascade nested"
        );
        Self {
            value,
            depth: self.depth + 1,
        }
    }

    /// Run `subtree` with `provided` visible to every read inside it.
    pub fn provide<R>(&self, provided: V, subtree: impl FnOnce(&Self) -> R) -> R {
        subtree(&self.nested(provided))
    }
}

impl<V: CascadeValue> Default for Cascade<V> {
    fn default() -> Self {
        Self::root()
    }
}

impl<V: fmt::Debug> fmt::Debug for Cascade<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("value", &self.value)
            .field("depth", &self.depth)
            .finish()
    }
}
