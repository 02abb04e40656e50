//! Regions that move the whole window when dragged, such as a custom title bar.

use crate::geometry::{Point, Rect};

/// Handle returned by [`crate::ResizeController::bind_drag_bar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragBarId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct DragBar {
    pub(crate) region: Rect,
    /// Surface-local point the current gesture grabbed the bar at.
    offset: Point,
}

impl DragBar {
    pub(crate) fn new(region: Rect) -> Self {
        Self {
            region,
            offset: Point::default(),
        }
    }

    pub(crate) fn contains(&self, local: Point) -> bool {
        self.region.contains(local)
    }

    /// Remember where the bar was grabbed. Ignored while dragging is off.
    pub(crate) fn press(&mut self, local: Point, draggable: bool) {
        if !draggable {
            return;
        }
        self.offset = local;
    }

    /// New window position for a drag to `screen`, or `None` while dragging
    /// is off.
    pub(crate) fn drag(&self, screen: Point, draggable: bool) -> Option<Point> {
        if !draggable {
            return None;
        }
        Some(screen - self.offset)
    }
}
