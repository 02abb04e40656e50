//! # frameless-ui
//!
//! Mouse-driven resizing and dragging for undecorated (borderless) windows.
//!
//! ## Features
//! - Resize bands along every edge and corner of the content area
//! - Resize cursor feedback while the pointer hovers a band
//! - Per-axis minimum-size clamping during resize
//! - Drag bars (custom title bars) that move the whole window
//! - Horizontal-only mode that switches off top, bottom and corner resizing
//! - Toolkit-agnostic core behind the [`HostWindow`] trait, with a tao adapter
//!
//! ## Example
//!
//! ```no_run
//! use frameless_ui::{EventLoop, FramelessWindowBuilder};
//!
//! fn main() {
//!     let event_loop = EventLoop::new();
//!
//!     let window = FramelessWindowBuilder::new()
//!         .with_size(800, 600)
//!         .with_min_size(320, 240)
//!         .with_title_bar_height(32.0)
//!         .with_resizable_area(8)
//!         .build(&event_loop)
//!         .expect("Failed to create window");
//!
//!     frameless_ui::run(window, event_loop);
//! }
//! ```

pub mod controller;
pub mod drag_bar;
pub mod geometry;
pub mod host;
pub mod resize;
mod window;
pub mod zone;

// Core
pub use controller::{ResizeConfig, ResizeController, DEFAULT_RESIZABLE_AREA};
pub use drag_bar::DragBarId;
pub use geometry::{Point, Rect, Size};
pub use host::{CursorShape, HostWindow, PointerEvent};
pub use resize::{DragSnapshot, GeometryUpdate, ResizeEdge};
pub use zone::ResizeTriggers;

// Window
pub use window::{
    run, run_with_app, FramelessApp, FramelessEvent, FramelessWindow, FramelessWindowBuilder,
    TaoHost, WindowConfig, WindowError,
};

// Re-export commonly used types
pub use tao::event_loop::EventLoop;
