//! Frameless window creation and event routing
//!
//! [`FramelessWindow`] pairs a borderless tao window with a
//! [`ResizeController`] and translates tao's cursor and mouse events into the
//! controller's pointer entry points.

mod config;
mod platform;

pub use config::WindowConfig;

use tao::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{CursorIcon, Window, WindowBuilder},
};
use thiserror::Error;

use crate::controller::{ResizeConfig, ResizeController};
use crate::drag_bar::DragBarId;
use crate::geometry::{Point, Rect, Size};
use crate::host::{CursorShape, HostWindow, PointerEvent};
use platform::configure_window;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Failed to create window: {0}")]
    WindowCreationFailed(#[from] tao::error::OsError),
}

/// A tao window seen through [`HostWindow`]. All geometry is in physical pixels.
pub struct TaoHost {
    window: Window,
    /// Minimum size in logical pixels; converted on every query so scale
    /// factor changes are picked up.
    min_logical: (u32, u32),
    cursor: CursorShape,
}

impl TaoHost {
    fn new(window: Window, min_logical: (u32, u32)) -> Self {
        Self {
            window,
            min_logical,
            cursor: CursorShape::Default,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Convert a cursor position relative to the window into a pointer event.
    fn pointer_event(&self, position: PhysicalPosition<f64>) -> PointerEvent {
        let local = Point::new(position.x, position.y);
        // Fires on every cursor move, so keep the fallback quiet.
        let origin = match self.window.inner_position() {
            Ok(p) => Point::new(p.x as f64, p.y as f64),
            Err(e) => {
                log::debug!("Window position unavailable, using origin: {}", e);
                Point::default()
            }
        };
        PointerEvent::new(local, Point::new(origin.x + local.x, origin.y + local.y))
    }
}

impl HostWindow for TaoHost {
    fn position(&self) -> Point {
        match self.window.outer_position() {
            Ok(p) => Point::new(p.x as f64, p.y as f64),
            Err(e) => {
                log::warn!("Window position unavailable, using origin: {}", e);
                Point::default()
            }
        }
    }

    fn set_position(&mut self, position: Point) {
        self.window.set_outer_position(PhysicalPosition::new(
            position.x.round() as i32,
            position.y.round() as i32,
        ));
    }

    fn size(&self) -> Size {
        let size = self.window.inner_size();
        Size::new(size.width as f64, size.height as f64)
    }

    fn set_size(&mut self, size: Size) {
        self.window.set_inner_size(PhysicalSize::new(
            size.width.round().max(1.0) as u32,
            size.height.round().max(1.0) as u32,
        ));
    }

    fn min_size(&self) -> Size {
        let (width, height) = self.min_logical;
        let physical: PhysicalSize<f64> =
            LogicalSize::new(width as f64, height as f64).to_physical(self.window.scale_factor());
        Size::new(physical.width, physical.height)
    }

    fn cursor(&self) -> CursorShape {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        if self.cursor != cursor {
            self.window.set_cursor_icon(cursor_icon(cursor));
            self.cursor = cursor;
        }
    }

    fn primary_display_size(&self) -> Size {
        self.window
            .primary_monitor()
            .or_else(|| self.window.current_monitor())
            .map(|monitor| {
                let size = monitor.size();
                Size::new(size.width as f64, size.height as f64)
            })
            .unwrap_or_else(|| {
                log::warn!("No monitor reported, display size unknown");
                Size::default()
            })
    }
}

fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Default => CursorIcon::Default,
        CursorShape::NwResize => CursorIcon::NwResize,
        CursorShape::NeResize => CursorIcon::NeResize,
        CursorShape::SwResize => CursorIcon::SwResize,
        CursorShape::SeResize => CursorIcon::SeResize,
        CursorShape::EResize => CursorIcon::EResize,
        CursorShape::WResize => CursorIcon::WResize,
        CursorShape::NResize => CursorIcon::NResize,
        CursorShape::SResize => CursorIcon::SResize,
    }
}

/// A borderless window that resizes from its edges and drags by its title bar.
pub struct FramelessWindow {
    host: TaoHost,
    controller: ResizeController,
    title_bar: Option<DragBarId>,
    /// Logical height of the title-bar drag region.
    title_bar_height: f64,
    /// Current cursor position in window coordinates
    cursor_position: Option<PhysicalPosition<f64>>,
    button_down: bool,
}

impl FramelessWindow {
    /// Create a new frameless window with the given configuration.
    pub fn new(event_loop: &EventLoop<()>, config: WindowConfig) -> Result<Self, WindowError> {
        let (width, height) = config.initial_size();

        let window = WindowBuilder::new()
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(config.min_width, config.min_height))
            .with_decorations(false)
            .with_always_on_top(config.always_on_top)
            .with_title(&config.title)
            .build(event_loop)?;

        configure_window(&window);

        let host = TaoHost::new(window, (config.min_width, config.min_height));
        let controller = ResizeController::from_config(&host, &config.resize);

        log::info!(
            "Created frameless window '{}' {}x{} (min {}x{}), resize band {}px",
            config.title,
            width,
            height,
            config.min_width,
            config.min_height,
            config.resize.resizable_area
        );

        let mut frameless = Self {
            host,
            controller,
            title_bar: None,
            title_bar_height: config.title_bar_height,
            cursor_position: None,
            button_down: false,
        };

        if config.title_bar_height > 0.0 {
            let region = frameless.title_bar_region();
            frameless.title_bar = Some(frameless.controller.bind_drag_bar(region));
        }

        Ok(frameless)
    }

    /// Get the underlying tao window.
    pub fn window(&self) -> &Window {
        self.host.window()
    }

    pub fn controller(&self) -> &ResizeController {
        &self.controller
    }

    /// Mode flags, threshold and drag bars are changed through the controller.
    pub fn controller_mut(&mut self) -> &mut ResizeController {
        &mut self.controller
    }

    /// Drag bar covering the top of the window, if one was configured.
    pub fn title_bar(&self) -> Option<DragBarId> {
        self.title_bar
    }

    /// Request a redraw of the window.
    pub fn request_redraw(&self) {
        self.host.window().request_redraw();
    }

    fn title_bar_region(&self) -> Rect {
        let size = self.host.size();
        let height = self.title_bar_height * self.host.window().scale_factor();
        Rect::new(0.0, 0.0, size.width, height)
    }

    /// Handle cursor movement.
    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_position = Some(position);
        let event = self.host.pointer_event(position);

        if self.button_down {
            self.controller.pointer_dragged(&mut self.host, event);
        } else {
            self.controller.pointer_moved(&mut self.host, event);
        }
    }

    /// Handle cursor leaving the window.
    pub fn handle_cursor_left(&mut self) {
        self.cursor_position = None;
    }

    /// Handle a left-button press or release.
    pub fn handle_left_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.button_down = true;
                if let Some(position) = self.cursor_position {
                    let event = self.host.pointer_event(position);
                    self.controller.pointer_pressed(&mut self.host, event);
                }
            }
            ElementState::Released => self.button_down = false,
            _ => {}
        }
    }

    /// A lost focus can swallow the release, so end the gesture here.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.button_down = false;
        }
    }

    /// Keep the title bar as wide as the window.
    pub fn handle_resize(&mut self, _width: u32, _height: u32) {
        if let Some(id) = self.title_bar {
            let region = self.title_bar_region();
            self.controller.set_drag_bar_region(id, region);
        }
    }
}

/// Events that can be emitted by the frameless window
#[derive(Debug, Clone)]
pub enum FramelessEvent {
    /// Window was resized
    Resized(u32, u32),
    /// Window was moved (x, y in screen coordinates)
    Moved(i32, i32),
    /// The user asked to close the window
    CloseRequested,
}

/// Application trait for handling frameless window events
pub trait FramelessApp {
    /// Called when an event occurs
    fn on_event(&mut self, window: &mut FramelessWindow, event: FramelessEvent);

    /// Return true if the app wants to quit
    fn should_quit(&self) -> bool {
        false
    }
}

impl FramelessApp for () {
    fn on_event(&mut self, _window: &mut FramelessWindow, _event: FramelessEvent) {}
}

/// Run the frameless window event loop.
///
/// This takes ownership of the FramelessWindow and runs until the window is closed.
pub fn run(window: FramelessWindow, event_loop: EventLoop<()>) {
    run_with_app(window, event_loop, ())
}

/// Run the frameless window event loop with custom event handling.
pub fn run_with_app<A: FramelessApp + 'static>(
    mut window: FramelessWindow,
    event_loop: EventLoop<()>,
    mut app: A,
) {
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                window.handle_cursor_moved(position);
            }

            Event::WindowEvent {
                event: WindowEvent::CursorLeft { .. },
                ..
            } => {
                window.handle_cursor_left();
            }

            Event::WindowEvent {
                event: WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                },
                ..
            } => {
                window.handle_left_button(state);
            }

            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                window.handle_focus(focused);
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                window.handle_resize(size.width, size.height);
                app.on_event(&mut window, FramelessEvent::Resized(size.width, size.height));
                window.request_redraw();
            }

            Event::WindowEvent {
                event: WindowEvent::Moved(position),
                ..
            } => {
                app.on_event(&mut window, FramelessEvent::Moved(position.x, position.y));
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                app.on_event(&mut window, FramelessEvent::CloseRequested);
                *control_flow = ControlFlow::Exit;
            }

            Event::MainEventsCleared => {
                if app.should_quit() {
                    *control_flow = ControlFlow::Exit;
                }
            }

            _ => (),
        }
    });
}

/// Builder for creating frameless windows.
pub struct FramelessWindowBuilder {
    config: WindowConfig,
}

impl FramelessWindowBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: WindowConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: WindowConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the minimum size the resize handlers respect.
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.config.min_width = width;
        self.config.min_height = height;
        self
    }

    /// Set whether the window should always be on top.
    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.config.always_on_top = always_on_top;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the title-bar drag height (0 disables the title bar).
    pub fn with_title_bar_height(mut self, height: f64) -> Self {
        self.config.title_bar_height = height;
        self
    }

    /// Set the resize band width and initial mode flags.
    pub fn with_resize(mut self, resize: ResizeConfig) -> Self {
        self.config.resize = resize;
        self
    }

    /// Set the width of the resize bands in pixels.
    pub fn with_resizable_area(mut self, area: u32) -> Self {
        self.config.resize.resizable_area = area;
        self
    }

    /// Set whether top, bottom and corner resizing is enabled.
    pub fn with_vertical_resizeable(mut self, enabled: bool) -> Self {
        self.config.resize.vertical_resizeable = enabled;
        self
    }

    /// Build the FramelessWindow.
    pub fn build(self, event_loop: &EventLoop<()>) -> Result<FramelessWindow, WindowError> {
        FramelessWindow::new(event_loop, self.config)
    }
}

impl Default for FramelessWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_icon_mapping() {
        assert_eq!(cursor_icon(CursorShape::Default), CursorIcon::Default);
        assert_eq!(cursor_icon(CursorShape::NwResize), CursorIcon::NwResize);
        assert_eq!(cursor_icon(CursorShape::SeResize), CursorIcon::SeResize);
        assert_eq!(cursor_icon(CursorShape::EResize), CursorIcon::EResize);
        assert_eq!(cursor_icon(CursorShape::SResize), CursorIcon::SResize);
    }

    #[test]
    fn test_builder_collects_config() {
        let builder = FramelessWindowBuilder::new()
            .with_size(640, 480)
            .with_min_size(320, 240)
            .with_title("Notes")
            .with_title_bar_height(28.0)
            .with_resizable_area(6)
            .with_vertical_resizeable(false);

        assert_eq!((builder.config.width, builder.config.height), (640, 480));
        assert_eq!((builder.config.min_width, builder.config.min_height), (320, 240));
        assert_eq!(builder.config.title, "Notes");
        assert_eq!(builder.config.title_bar_height, 28.0);
        assert_eq!(builder.config.resize.resizable_area, 6);
        assert!(!builder.config.resize.vertical_resizeable);
    }
}
