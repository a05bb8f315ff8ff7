//! Developer diagnostics for suspicious button configurations.
//!
//! Diagnostics never change how a button resolves. They are routed through
//! the [`Diagnostics`] trait so hosts decide where they go: the default
//! [`TracingDiagnostics`] emits each distinct message once as a `tracing`
//! warning, and [`CollectingDiagnostics`] keeps them for inspection.

use std::collections::HashSet;
use std::fmt;

use parking_lot::Mutex;

/// One non-fatal configuration warning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// The component that raised it, e.g. `"Button"`.
    pub component: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            component,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.component, self.message)
    }
}

/// Receives configuration warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, diagnostic: Diagnostic);
}

/// Emit `message` unless `valid` holds.
///
/// The message is only built when it is going to be reported.
pub fn warning(
    diagnostics: &dyn Diagnostics,
    valid: bool,
    component: &'static str,
    message: impl FnOnce() -> String,
) {
    if !valid {
        diagnostics.warn(Diagnostic::new(component, message()));
    }
}

/// Reports each distinct diagnostic once through `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    seen: Mutex<HashSet<Diagnostic>>,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, diagnostic: Diagnostic) {
        let mut seen = self.seen.lock();
        if seen.contains(&diagnostic) {
            return;
        }
        tracing::warn!(
            target: "horizon_cascade_button::diagnostics",
            component = diagnostic.component,
            "{}",
            diagnostic.message
        );
        seen.insert(diagnostic);
    }
}

/// Keeps every diagnostic it receives.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything received so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Drain everything received so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}
