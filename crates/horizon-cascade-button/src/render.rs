//! The seam to the rendering runtime.

use crate::element_ref::ElementHandle;
use crate::variant::RootElement;

/// Materializes root elements. Implemented by the host's rendering runtime.
pub trait Renderer {
    /// Create a live element for `element` and return its handle.
    fn mount(&mut self, element: &RootElement) -> ElementHandle;

    /// Apply new attributes to a mounted element of the same kind.
    fn update(&mut self, handle: ElementHandle, element: &RootElement);

    /// Remove a mounted element.
    fn unmount(&mut self, handle: ElementHandle);
}
