//! Ambient, tree-scoped configuration.
//!
//! Four independent cascades carry values from boundaries down to the
//! controls below them:
//!
//! - [`ScopeStore`]: name prefix, text direction, auto-space rule
//! - [`SizeCascade`]: the general component size
//! - [`DisabledCascade`]: the disabled flag (monotonic OR)
//! - [`GroupSizeCascade`]: the size set by an enclosing button group
//!
//! They are bundled in [`Scopes`], which is passed explicitly through every
//! render call. There is no global or thread-local lookup.

mod cascade;
mod config;
mod disabled;
mod provider;
mod scopes;
mod size;

pub use cascade::{Cascade, CascadeValue};
pub use config::{ConfigScope, Direction, ScopeStore, DEFAULT_PREFIX_CLS};
pub use disabled::{DisabledCascade, DisabledScope};
pub use provider::ConfigProvider;
pub use scopes::Scopes;
pub use size::{GroupSizeCascade, GroupSizeScope, SizeCascade, SizeScope, SizeType};
