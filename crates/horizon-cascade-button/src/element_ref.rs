//! Element handles and the two kinds of element reference.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Which kind of root element a handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A hyperlink-like element.
    Anchor,
    /// A press-button element.
    Button,
}

/// A live element created by the rendering runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    id: u64,
    kind: ElementKind,
}

impl ElementHandle {
    /// Create a handle. Only renderers should need this.
    pub fn new(id: u64, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    pub fn id(self) -> u64 {
        self.id
    }

    pub fn kind(self) -> ElementKind {
        self.kind
    }
}

/// A shared cell that holds the element while it is mounted.
#[derive(Clone, Default)]
pub struct ElementSlot {
    inner: Arc<Mutex<Option<ElementHandle>>>,
}

impl ElementSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mounted element, if any.
    pub fn get(&self) -> Option<ElementHandle> {
        *self.inner.lock()
    }

    fn set(&self, element: Option<ElementHandle>) {
        *self.inner.lock() = element;
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ElementSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementSlot").field(&self.get()).finish()
    }
}

/// Callback form of an element reference.
pub type RefCallback = Arc<dyn Fn(ElementHandle) + Send + Sync>;

/// Where a button reports its root element.
#[derive(Clone)]
pub enum ElementRef {
    /// Invoked exactly once per mount with the live element.
    Callback(RefCallback),
    /// Populated on mount, cleared on unmount.
    Slot(ElementSlot),
}

impl ElementRef {
    /// A callback reference.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(ElementHandle) + Send + Sync + 'static,
    {
        ElementRef::Callback(Arc::new(f))
    }

    /// A slot reference sharing `slot`.
    pub fn slot(slot: &ElementSlot) -> Self {
        ElementRef::Slot(slot.clone())
    }

    /// Whether both references report to the same place.
    pub fn same_target(&self, other: &ElementRef) -> bool {
        match (self, other) {
            (ElementRef::Callback(a), ElementRef::Callback(b)) => Arc::ptr_eq(a, b),
            (ElementRef::Slot(a), ElementRef::Slot(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub(crate) fn attach(&self, element: ElementHandle) {
        match self {
            ElementRef::Callback(callback) => callback(element),
            ElementRef::Slot(slot) => slot.set(Some(element)),
        }
    }

    /// Point a replacement ref at an element that stays mounted.
    ///
    /// Slots are populated; callbacks are not invoked, since no new element
    /// was created.
    pub(crate) fn rebind(&self, element: ElementHandle) {
        if let ElementRef::Slot(slot) = self {
            slot.set(Some(element));
        }
    }

    pub(crate) fn detach(&self) {
        match self {
            ElementRef::Callback(_) => {}
            ElementRef::Slot(slot) => slot.set(None),
        }
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Callback(_) => f.write_str("Callback(Fn)"),
            ElementRef::Slot(slot) => f.debug_tuple("Slot").field(slot).finish(),
        }
    }
}
