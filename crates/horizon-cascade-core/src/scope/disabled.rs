//! The ambient disabled flag.

use super::cascade::{Cascade, CascadeValue};

/// Whether controls below a boundary are disabled.
///
/// Boundaries compose by logical OR: once an ancestor disables a subtree, no
/// descendant boundary can enable it again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisabledScope(pub bool);

impl CascadeValue for DisabledScope {
    fn root() -> Self {
        DisabledScope(false)
    }

    fn compose(inherited: &Self, provided: Self) -> Self {
        DisabledScope(inherited.0 || provided.0)
    }
}

/// The disabled cascade.
pub type DisabledCascade = Cascade<DisabledScope>;
