//! What the controller needs from the window it decorates.
//!
//! The controller does not know which toolkit it runs under. A host adapter
//! implements [`HostWindow`] and forwards pointer events to the controller's
//! entry points; see [`crate::window`] for the tao one.

use crate::geometry::{Point, Size};

/// Cursor shapes the controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Default,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
    EResize,
    WResize,
    NResize,
    SResize,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Position relative to the content surface.
    pub local: Point,
    /// Position in screen coordinates.
    pub screen: Point,
}

impl PointerEvent {
    pub fn new(local: Point, screen: Point) -> Self {
        Self { local, screen }
    }
}

/// Geometry and cursor access to a top-level window.
pub trait HostWindow {
    /// Window position in screen coordinates.
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    /// Current window size.
    fn size(&self) -> Size;

    fn set_size(&mut self, size: Size);

    /// Smallest size the window may be given.
    fn min_size(&self) -> Size;

    /// Size of the content surface the pointer events are relative to.
    ///
    /// For an undecorated window this is the window itself.
    fn surface_size(&self) -> Size {
        self.size()
    }

    fn cursor(&self) -> CursorShape;

    fn set_cursor(&mut self, cursor: CursorShape);

    /// Size of the primary display's usable area.
    fn primary_display_size(&self) -> Size;
}
