//! Edge proximity classification for the content surface.

use crate::geometry::{Point, Size};

/// Which resize bands a surface-local point falls into.
///
/// `top` is the band along the maximum-y edge of the surface and `bottom`
/// the band along y = 0. The handler table in [`crate::resize::ResizeEdge::select`]
/// is wired against these exact comparisons, so the names stay as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeTriggers {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ResizeTriggers {
    /// Classify `local` against bands of width `area` along each edge of a
    /// surface of size `surface`.
    pub fn classify(local: Point, surface: Size, area: f64) -> Self {
        Self {
            left: local.x > 0.0 && local.x < area,
            right: local.x < surface.width && local.x > surface.width - area,
            top: local.y < surface.height && local.y > surface.height - area,
            bottom: local.y > 0.0 && local.y < area,
        }
    }

    /// True when any of the vertical-axis facets is set.
    pub fn any_vertical(&self) -> bool {
        self.top || self.bottom
    }

    /// True when no facet is set.
    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }
}

/// Inclusive bounds check against `[0, width] x [0, height]`.
pub fn within_surface(local: Point, surface: Size) -> bool {
    local.x >= 0.0 && local.x <= surface.width && local.y >= 0.0 && local.y <= surface.height
}

/// Whether `local` lies in a resize band that is currently active.
///
/// The left and right bands always count. The top and bottom bands only
/// count while vertical resizing is enabled.
pub fn in_resize_zone(local: Point, surface: Size, area: f64, vertical_resizeable: bool) -> bool {
    if !within_surface(local, surface) {
        return false;
    }

    let triggers = ResizeTriggers::classify(local, surface, area);
    triggers.left || triggers.right || (triggers.any_vertical() && vertical_resizeable)
}
