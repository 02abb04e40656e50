//! Directional resize handlers.
//!
//! Each [`ResizeEdge`] pairs an optional width rule with an optional height
//! rule. Handlers are pure: they turn the press snapshot and the live
//! pointer into a [`GeometryUpdate`] and the controller writes it back.
//!
//! The compass names follow the cursor shapes the host shows. `East` is
//! armed from the left band and grows the window leftward, `West` from the
//! right band, `North` from the `bottom` facet and `South` from the `top`
//! facet (see [`crate::zone::ResizeTriggers`]).

use crate::geometry::{Point, Size};
use crate::host::CursorShape;
use crate::zone::ResizeTriggers;

/// Reference frame captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSnapshot {
    /// Pointer position relative to the content surface.
    pub local: Point,
    /// Pointer position in screen coordinates.
    pub screen: Point,
    /// Window size at press time.
    pub size: Size,
}

/// Geometry fields a handler wants written. `None` leaves a field alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl GeometryUpdate {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    pub fn moves(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    pub fn resizes(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidthRule {
    /// Left edge follows the pointer, right edge stays put.
    Leading,
    /// Right edge follows the pointer.
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeightRule {
    /// Edge at y = 0 follows the pointer, the opposite edge stays put.
    Leading,
    /// Edge at the maximum y follows the pointer.
    Trailing,
}

/// One of the eight armed resize handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    East,
    West,
    North,
    South,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::NorthWest,
        ResizeEdge::NorthEast,
        ResizeEdge::SouthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::North,
        ResizeEdge::South,
    ];

    /// Pick the handler for a classification. First match wins; `None` is the
    /// default outcome.
    pub fn select(triggers: ResizeTriggers, vertical_resizeable: bool) -> Option<Self> {
        let ResizeTriggers { left, right, top, bottom } = triggers;
        let v = vertical_resizeable;

        if left && bottom && v {
            Some(Self::NorthWest)
        } else if left && top && v {
            Some(Self::NorthEast)
        } else if right && bottom && v {
            Some(Self::SouthWest)
        } else if right && top && v {
            Some(Self::SouthEast)
        } else if left {
            Some(Self::East)
        } else if right {
            Some(Self::West)
        } else if bottom && v {
            Some(Self::North)
        } else if top && v {
            Some(Self::South)
        } else {
            None
        }
    }

    pub fn cursor(self) -> CursorShape {
        match self {
            Self::NorthWest => CursorShape::NwResize,
            Self::NorthEast => CursorShape::NeResize,
            Self::SouthWest => CursorShape::SwResize,
            Self::SouthEast => CursorShape::SeResize,
            Self::East => CursorShape::EResize,
            Self::West => CursorShape::WResize,
            Self::North => CursorShape::NResize,
            Self::South => CursorShape::SResize,
        }
    }

    /// Whether this handler touches the height. Such handlers only run while
    /// vertical resizing is enabled.
    pub fn is_vertical(self) -> bool {
        self.height_rule().is_some()
    }

    fn width_rule(self) -> Option<WidthRule> {
        match self {
            Self::NorthWest | Self::NorthEast | Self::East => Some(WidthRule::Leading),
            Self::SouthWest | Self::SouthEast | Self::West => Some(WidthRule::Trailing),
            Self::North | Self::South => None,
        }
    }

    fn height_rule(self) -> Option<HeightRule> {
        match self {
            Self::NorthWest | Self::SouthWest | Self::North => Some(HeightRule::Leading),
            Self::NorthEast | Self::SouthEast | Self::South => Some(HeightRule::Trailing),
            Self::East | Self::West => None,
        }
    }

    /// Compute the geometry for one drag event.
    ///
    /// Width and height are guarded separately: an axis whose candidate does
    /// not exceed the minimum is skipped together with its position, while
    /// the other axis may still change.
    pub fn apply(
        self,
        snapshot: &DragSnapshot,
        screen: Point,
        min_size: Size,
        vertical_resizeable: bool,
    ) -> GeometryUpdate {
        let mut update = GeometryUpdate::default();
        if self.is_vertical() && !vertical_resizeable {
            return update;
        }

        let delta = screen - snapshot.screen;

        match self.width_rule() {
            Some(WidthRule::Leading) => {
                let width = snapshot.size.width - delta.x;
                if width > min_size.width {
                    update.x = Some(screen.x - snapshot.local.x);
                    update.width = Some(width);
                }
            }
            Some(WidthRule::Trailing) => {
                let width = snapshot.size.width + delta.x;
                if width > min_size.width {
                    update.width = Some(width);
                }
            }
            None => {}
        }

        match self.height_rule() {
            Some(HeightRule::Leading) => {
                let height = snapshot.size.height - delta.y;
                if height > min_size.height {
                    update.y = Some(screen.y - snapshot.local.y);
                    update.height = Some(height);
                }
            }
            Some(HeightRule::Trailing) => {
                let height = snapshot.size.height + delta.y;
                if height > min_size.height {
                    update.height = Some(height);
                }
            }
            None => {}
        }

        update
    }
}
