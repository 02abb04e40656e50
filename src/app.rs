//! Application state - reacts to window events

use frameless_ui::{FramelessApp, FramelessEvent, FramelessWindow};

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    last_size: Option<(u32, u32)>,
    last_position: Option<(i32, i32)>,
    quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FramelessApp for App {
    fn on_event(&mut self, window: &mut FramelessWindow, event: FramelessEvent) {
        match event {
            FramelessEvent::Resized(width, height) => {
                if self.last_size != Some((width, height)) {
                    log::debug!(
                        "Resized to {}x{} (armed: {:?})",
                        width,
                        height,
                        window.controller().armed()
                    );
                    self.last_size = Some((width, height));
                }
            }
            FramelessEvent::Moved(x, y) => {
                self.last_position = Some((x, y));
                log::trace!("Moved to ({}, {})", x, y);
            }
            FramelessEvent::CloseRequested => {
                log::info!(
                    "Closing at {:?} with size {:?}",
                    self.last_position,
                    self.last_size
                );
                self.quit = true;
            }
        }
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
