//! The capability a scene object must expose to participate in LOD selection.

use std::cell::RefCell;
use std::rc::Rc;

/// An opaque handle to a renderable scene object whose visibility the
/// selector toggles. The selector never owns the object's lifecycle, only
/// its visible flag.
pub trait Renderable {
    fn set_visible(&mut self, visible: bool);
}

impl<T: Renderable + ?Sized> Renderable for &mut T {
    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}

/// Shared handle: the caller keeps clones of the `Rc` and renders through
/// them while the selector drives visibility.
impl<T: Renderable> Renderable for Rc<RefCell<T>> {
    fn set_visible(&mut self, visible: bool) {
        self.borrow_mut().set_visible(visible);
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}
