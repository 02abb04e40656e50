//! Resize/drag state machine for one undecorated window.
//!
//! The host forwards three kinds of pointer events:
//!
//! - [`ResizeController::pointer_moved`] while no button is held. Runs the
//!   leave-zone filter, then classifies the pointer and arms a handler.
//! - [`ResizeController::pointer_pressed`] at the start of a gesture.
//!   Captures the [`DragSnapshot`] and picks the drag bar under the pointer.
//! - [`ResizeController::pointer_dragged`] while the button is held. Runs the
//!   armed handler or moves the window through the pressed drag bar.
//!
//! There is no release entry point. The next press overwrites the snapshot
//! and the next move re-evaluates the armed handler.

use serde::Deserialize;

use crate::drag_bar::{DragBar, DragBarId};
use crate::geometry::{Point, Rect, Size};
use crate::host::{CursorShape, HostWindow, PointerEvent};
use crate::resize::{DragSnapshot, GeometryUpdate, ResizeEdge};
use crate::zone::{self, ResizeTriggers};

/// Default width of the resize bands in pixels.
pub const DEFAULT_RESIZABLE_AREA: u32 = 8;

/// Initial mode flags and threshold for a [`ResizeController`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResizeConfig {
    /// Width of the resize band along each edge, in pixels.
    #[serde(default = "default_resizable_area")]
    pub resizable_area: u32,
    /// Master switch for edge detection.
    #[serde(default = "default_true")]
    pub resizeable: bool,
    /// Enables the top, bottom and corner handlers.
    #[serde(default = "default_true")]
    pub vertical_resizeable: bool,
    /// Whether drag bars may move the window.
    #[serde(default = "default_true")]
    pub draggable: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            resizable_area: DEFAULT_RESIZABLE_AREA,
            resizeable: true,
            vertical_resizeable: true,
            draggable: true,
        }
    }
}

fn default_resizable_area() -> u32 {
    DEFAULT_RESIZABLE_AREA
}

fn default_true() -> bool {
    true
}

/// Gives an undecorated window edge resizing and drag bars.
#[derive(Debug, Clone)]
pub struct ResizeController {
    resizable_area: f64,
    resizeable: bool,
    vertical_resizeable: bool,
    draggable: bool,
    /// Handler the next drag runs. `None` is the default outcome.
    armed: Option<ResizeEdge>,
    snapshot: DragSnapshot,
    drag_bars: Vec<Option<DragBar>>,
    /// Drag bar grabbed by the current gesture.
    pressed_bar: Option<DragBarId>,
    screen_size: Size,
}

impl ResizeController {
    /// Create a controller for `host`.
    ///
    /// The primary display size is read once here.
    pub fn new<H: HostWindow + ?Sized>(host: &H, draggable: bool, resizable_area: u32) -> Self {
        let screen_size = host.primary_display_size();
        log::debug!(
            "Resize controller: area={}px, draggable={}, display={}x{}",
            resizable_area,
            draggable,
            screen_size.width,
            screen_size.height
        );

        Self {
            resizable_area: resizable_area as f64,
            resizeable: true,
            vertical_resizeable: true,
            draggable,
            armed: None,
            snapshot: DragSnapshot::default(),
            drag_bars: Vec::new(),
            pressed_bar: None,
            screen_size,
        }
    }

    /// Create a controller with every flag taken from `config`.
    pub fn from_config<H: HostWindow + ?Sized>(host: &H, config: &ResizeConfig) -> Self {
        let mut controller = Self::new(host, config.draggable, config.resizable_area);
        controller.resizeable = config.resizeable;
        controller.vertical_resizeable = config.vertical_resizeable;
        controller
    }

    pub fn set_resizable_area(&mut self, resizable_area: u32) {
        self.resizable_area = resizable_area as f64;
    }

    pub fn resizable_area(&self) -> u32 {
        self.resizable_area as u32
    }

    pub fn set_resizeable(&mut self, resizeable: bool) {
        self.resizeable = resizeable;
    }

    pub fn is_resizeable(&self) -> bool {
        self.resizeable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_vertical_resizeable(&mut self, vertical_resizeable: bool) {
        self.vertical_resizeable = vertical_resizeable;
    }

    pub fn is_vertical_resizeable(&self) -> bool {
        self.vertical_resizeable
    }

    /// Handler armed for the next drag, if any.
    pub fn armed(&self) -> Option<ResizeEdge> {
        self.armed
    }

    /// Reference frame of the current or last gesture.
    pub fn snapshot(&self) -> &DragSnapshot {
        &self.snapshot
    }

    /// Primary display width captured at construction.
    pub fn screen_width(&self) -> f64 {
        self.screen_size.width
    }

    /// Primary display height captured at construction.
    pub fn screen_height(&self) -> f64 {
        self.screen_size.height
    }

    /// Classify a surface-local point with the current threshold.
    pub fn triggers<H: HostWindow + ?Sized>(&self, host: &H, local: Point) -> ResizeTriggers {
        ResizeTriggers::classify(local, host.surface_size(), self.resizable_area)
    }

    /// Whether `local` is in an active resize band. Always false while
    /// resizing is disabled.
    pub fn in_resize_zone<H: HostWindow + ?Sized>(&self, host: &H, local: Point) -> bool {
        if !self.resizeable {
            return false;
        }
        zone::in_resize_zone(
            local,
            host.surface_size(),
            self.resizable_area,
            self.vertical_resizeable,
        )
    }

    /// Make `region` (surface-local) move the window when dragged.
    ///
    /// Bars bound later win when regions overlap.
    pub fn bind_drag_bar(&mut self, region: Rect) -> DragBarId {
        let id = DragBarId(self.drag_bars.len());
        self.drag_bars.push(Some(DragBar::new(region)));
        log::debug!("Bound drag bar {:?} at {:?}", id, region);
        id
    }

    /// Move or resize a bound drag bar. Returns false for an unknown id.
    pub fn set_drag_bar_region(&mut self, id: DragBarId, region: Rect) -> bool {
        match self.drag_bars.get_mut(id.0) {
            Some(Some(bar)) => {
                bar.region = region;
                true
            }
            _ => false,
        }
    }

    /// Stop treating a region as a drag bar. Returns false for an unknown id.
    pub fn unbind_drag_bar(&mut self, id: DragBarId) -> bool {
        let Some(slot) = self.drag_bars.get_mut(id.0) else {
            return false;
        };
        let removed = slot.take().is_some();
        if removed {
            if self.pressed_bar == Some(id) {
                self.pressed_bar = None;
            }
            log::debug!("Unbound drag bar {:?}", id);
        }
        removed
    }

    /// Start of a gesture.
    pub fn pointer_pressed<H: HostWindow + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        self.snapshot = DragSnapshot {
            local: event.local,
            screen: event.screen,
            size: host.size(),
        };

        self.pressed_bar = self
            .drag_bars
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, bar)| match bar {
                Some(bar) if bar.contains(event.local) => Some(DragBarId(index)),
                _ => None,
            });

        if let Some(id) = self.pressed_bar {
            let draggable = self.draggable;
            if let Some(Some(bar)) = self.drag_bars.get_mut(id.0) {
                bar.press(event.local, draggable);
            }
        }
    }

    /// Pointer motion with no button held.
    pub fn pointer_moved<H: HostWindow + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        self.leave_zone_filter(host, event.local);

        if !self.resizeable {
            return;
        }

        let triggers = self.triggers(host, event.local);
        let outcome = ResizeEdge::select(triggers, self.vertical_resizeable);
        self.fire(host, outcome);
    }

    /// Pointer motion with the button held.
    pub fn pointer_dragged<H: HostWindow + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        if let Some(id) = self.pressed_bar {
            let target = match self.drag_bars.get(id.0) {
                Some(Some(bar)) => bar.drag(event.screen, self.draggable),
                _ => None,
            };
            if let Some(position) = target {
                log::trace!("Drag bar {:?} moves window to {:?}", id, position);
                host.set_position(position);
            }
        }

        if let Some(edge) = self.armed {
            let update = edge.apply(
                &self.snapshot,
                event.screen,
                host.min_size(),
                self.vertical_resizeable,
            );
            apply_update(host, &update);
        }
    }

    /// Capture-phase check: once the pointer is outside every active band,
    /// drop back to the default state.
    fn leave_zone_filter<H: HostWindow + ?Sized>(&mut self, host: &mut H, local: Point) {
        if !self.in_resize_zone(host, local) {
            self.fire(host, None);
        }
    }

    fn fire<H: HostWindow + ?Sized>(&mut self, host: &mut H, outcome: Option<ResizeEdge>) {
        if self.armed != outcome {
            match outcome {
                Some(edge) => log::debug!("Armed {:?} resize", edge),
                None => log::debug!("Resize disarmed"),
            }
        }

        match outcome {
            Some(edge) => {
                host.set_cursor(edge.cursor());
                self.draggable = false;
                self.armed = Some(edge);
            }
            None => {
                self.armed = None;
                self.draggable = true;
                host.set_cursor(CursorShape::Default);
            }
        }
    }
}

fn apply_update<H: HostWindow + ?Sized>(host: &mut H, update: &GeometryUpdate) {
    if update.moves() {
        let current = host.position();
        let position = Point::new(update.x.unwrap_or(current.x), update.y.unwrap_or(current.y));
        log::trace!("Resize moves window to {:?}", position);
        host.set_position(position);
    }

    if update.resizes() {
        let current = host.size();
        let size = Size::new(
            update.width.unwrap_or(current.width),
            update.height.unwrap_or(current.height),
        );
        log::trace!("Resize sets size {}x{}", size.width, size.height);
        host.set_size(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::MockHost;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn event(lx: f64, ly: f64, sx: f64, sy: f64) -> PointerEvent {
        PointerEvent::new(Point::new(lx, ly), Point::new(sx, sy))
    }

    fn setup() -> (MockHost, ResizeController) {
        init_logging();
        let host = MockHost::new(300.0, 300.0, 500.0, 500.0).with_surface(800.0, 800.0);
        let controller = ResizeController::new(&host, true, 10);
        (host, controller)
    }

    #[test]
    fn test_new_reads_display_size_and_flags() {
        let (host, controller) = setup();
        assert_eq!(controller.screen_width(), host.display.width);
        assert_eq!(controller.screen_height(), host.display.height);
        assert_eq!(controller.resizable_area(), 10);
        assert!(controller.is_draggable());
        assert!(controller.is_resizeable());
        assert!(controller.is_vertical_resizeable());
        assert_eq!(controller.armed(), None);
    }

    #[test]
    fn test_from_config() {
        let host = MockHost::new(0.0, 0.0, 400.0, 300.0);
        let config = ResizeConfig {
            resizable_area: 6,
            resizeable: false,
            vertical_resizeable: false,
            draggable: false,
        };
        let controller = ResizeController::from_config(&host, &config);
        assert_eq!(controller.resizable_area(), 6);
        assert!(!controller.is_resizeable());
        assert!(!controller.is_vertical_resizeable());
        assert!(!controller.is_draggable());
    }

    #[test]
    fn test_top_left_corner_arms_north_west() {
        let (mut host, mut controller) = setup();
        controller.pointer_moved(&mut host, event(5.0, 5.0, 305.0, 305.0));

        let triggers = controller.triggers(&host, Point::new(5.0, 5.0));
        assert!(triggers.left && triggers.bottom);
        assert_eq!(controller.armed(), Some(ResizeEdge::NorthWest));
        assert_eq!(host.cursor, CursorShape::NwResize);
        assert!(!controller.is_draggable());
    }

    #[test]
    fn test_leaving_zone_restores_default() {
        let (mut host, mut controller) = setup();
        controller.pointer_moved(&mut host, event(5.0, 5.0, 305.0, 305.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::NorthWest));

        controller.pointer_moved(&mut host, event(400.0, 400.0, 700.0, 700.0));
        assert_eq!(controller.armed(), None);
        assert_eq!(host.cursor, CursorShape::Default);
        assert!(controller.is_draggable());
    }

    #[test]
    fn test_repeated_moves_are_stable() {
        let (mut host, mut controller) = setup();
        for y in [300.0, 350.0, 420.0] {
            controller.pointer_moved(&mut host, event(795.0, y, 1095.0, 300.0 + y));
            assert_eq!(controller.armed(), Some(ResizeEdge::West));
            assert_eq!(host.cursor, CursorShape::WResize);
            assert!(!controller.is_draggable());
        }
    }

    #[test]
    fn test_vertical_disabled_collapses_to_default() {
        let (mut host, mut controller) = setup();
        controller.set_vertical_resizeable(false);

        for (x, y) in [(400.0, 5.0), (400.0, 795.0)] {
            controller.pointer_moved(&mut host, event(x, y, 0.0, 0.0));
            assert_eq!(controller.armed(), None, "({x}, {y})");
            assert_eq!(host.cursor, CursorShape::Default);
            assert!(controller.is_draggable());
        }

        // Corners fall through to the horizontal handlers.
        controller.pointer_moved(&mut host, event(5.0, 5.0, 0.0, 0.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::East));
        controller.pointer_moved(&mut host, event(795.0, 795.0, 0.0, 0.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::West));
    }

    #[test]
    fn test_resizing_disabled_leaves_default_state() {
        let (mut host, mut controller) = setup();
        controller.set_resizeable(false);
        controller.pointer_moved(&mut host, event(5.0, 400.0, 305.0, 700.0));
        assert_eq!(controller.armed(), None);
        assert_eq!(host.cursor, CursorShape::Default);
        assert!(controller.is_draggable());
        assert!(!controller.in_resize_zone(&host, Point::new(5.0, 400.0)));
    }

    #[test]
    fn test_west_resize_scenario() {
        let (mut host, mut controller) = setup();
        host.min_size = Size::new(100.0, 100.0);

        controller.pointer_moved(&mut host, event(795.0, 400.0, 1095.0, 700.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::West));

        controller.pointer_pressed(&mut host, event(400.0, 400.0, 500.0, 500.0));
        assert_eq!(controller.snapshot().size, Size::new(500.0, 500.0));

        controller.pointer_dragged(&mut host, event(420.0, 410.0, 520.0, 510.0));
        assert_eq!(host.size, Size::new(520.0, 500.0));
        assert_eq!(host.position, Point::new(300.0, 300.0));
        assert_eq!(host.position_writes, 0);
    }

    #[test]
    fn test_min_clamp_keeps_other_axis() {
        init_logging();
        let mut host = MockHost::new(300.0, 300.0, 200.0, 200.0).with_min_size(100.0, 100.0);
        let mut controller = ResizeController::new(&host, true, 10);

        controller.pointer_moved(&mut host, event(5.0, 5.0, 305.0, 305.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::NorthWest));

        controller.pointer_pressed(&mut host, event(5.0, 5.0, 305.0, 305.0));
        controller.pointer_dragged(&mut host, event(155.0, -35.0, 455.0, 265.0));

        assert_eq!(host.size.width, 200.0);
        assert_eq!(host.position.x, 300.0);
        assert_eq!(host.size.height, 240.0);
        assert_eq!(host.position.y, 260.0);
    }

    #[test]
    fn test_release_leaves_handler_armed() {
        let (mut host, mut controller) = setup();
        controller.pointer_moved(&mut host, event(795.0, 400.0, 1095.0, 700.0));
        controller.pointer_pressed(&mut host, event(795.0, 400.0, 1095.0, 700.0));
        controller.pointer_dragged(&mut host, event(805.0, 400.0, 1105.0, 700.0));

        // No release entry point: the handler stays armed until the next move.
        assert_eq!(controller.armed(), Some(ResizeEdge::West));
        assert_eq!(host.cursor, CursorShape::WResize);
    }

    #[test]
    fn test_drag_bar_moves_window() {
        let (mut host, mut controller) = setup();
        controller.bind_drag_bar(Rect::new(0.0, 0.0, 800.0, 32.0));

        controller.pointer_moved(&mut host, event(200.0, 20.0, 500.0, 320.0));
        controller.pointer_pressed(&mut host, event(200.0, 20.0, 500.0, 320.0));
        controller.pointer_dragged(&mut host, event(200.0, 20.0, 650.0, 420.0));

        assert_eq!(host.position, Point::new(450.0, 400.0));
        assert_eq!(host.size_writes, 0);
    }

    #[test]
    fn test_armed_resize_blocks_drag_bar() {
        let (mut host, mut controller) = setup();
        controller.bind_drag_bar(Rect::new(0.0, 0.0, 800.0, 32.0));

        // Left band inside the bar arms East and switches dragging off.
        controller.pointer_moved(&mut host, event(5.0, 20.0, 305.0, 320.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::East));
        assert!(!controller.is_draggable());

        controller.pointer_pressed(&mut host, event(5.0, 20.0, 305.0, 320.0));
        controller.pointer_dragged(&mut host, event(5.0, 20.0, 295.0, 320.0));

        // Only the East handler ran: x follows the pointer, width grows by 10.
        assert_eq!(host.position, Point::new(290.0, 300.0));
        assert_eq!(host.size, Size::new(510.0, 500.0));
    }

    #[test]
    fn test_press_outside_bar_does_not_drag() {
        let (mut host, mut controller) = setup();
        controller.bind_drag_bar(Rect::new(0.0, 0.0, 800.0, 32.0));

        controller.pointer_pressed(&mut host, event(400.0, 400.0, 700.0, 700.0));
        controller.pointer_dragged(&mut host, event(400.0, 400.0, 800.0, 800.0));

        assert_eq!(host.position, Point::new(300.0, 300.0));
        assert_eq!(host.position_writes, 0);
    }

    #[test]
    fn test_external_draggable_off_blocks_drag_bar() {
        let (mut host, mut controller) = setup();
        controller.bind_drag_bar(Rect::new(0.0, 0.0, 800.0, 32.0));
        controller.set_draggable(false);

        controller.pointer_pressed(&mut host, event(200.0, 20.0, 500.0, 320.0));
        controller.pointer_dragged(&mut host, event(200.0, 20.0, 650.0, 420.0));
        assert_eq!(host.position_writes, 0);
    }

    #[test]
    fn test_drag_bar_region_update_and_unbind() {
        let (mut host, mut controller) = setup();
        let id = controller.bind_drag_bar(Rect::new(0.0, 0.0, 100.0, 32.0));

        controller.pointer_pressed(&mut host, event(300.0, 20.0, 600.0, 320.0));
        controller.pointer_dragged(&mut host, event(300.0, 20.0, 700.0, 320.0));
        assert_eq!(host.position_writes, 0);

        assert!(controller.set_drag_bar_region(id, Rect::new(0.0, 0.0, 800.0, 32.0)));
        controller.pointer_pressed(&mut host, event(300.0, 20.0, 600.0, 320.0));
        controller.pointer_dragged(&mut host, event(300.0, 20.0, 700.0, 320.0));
        assert_eq!(host.position, Point::new(400.0, 300.0));

        assert!(controller.unbind_drag_bar(id));
        assert!(!controller.unbind_drag_bar(id));
        assert!(!controller.set_drag_bar_region(id, Rect::default()));
    }

    #[test]
    fn test_resizable_area_setter_changes_bands() {
        let (mut host, mut controller) = setup();
        controller.pointer_moved(&mut host, event(15.0, 400.0, 315.0, 700.0));
        assert_eq!(controller.armed(), None);

        controller.set_resizable_area(20);
        controller.pointer_moved(&mut host, event(15.0, 400.0, 315.0, 700.0));
        assert_eq!(controller.armed(), Some(ResizeEdge::East));
    }

    #[test]
    fn test_config_defaults_from_toml() {
        let config: ResizeConfig = toml::from_str("resizable_area = 12").unwrap();
        assert_eq!(config.resizable_area, 12);
        assert!(config.resizeable);
        assert!(config.vertical_resizeable);
        assert!(config.draggable);

        let config: ResizeConfig = toml::from_str("").unwrap();
        assert_eq!(config, ResizeConfig::default());
    }
}
