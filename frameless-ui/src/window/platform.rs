//! Platform-specific setup for undecorated windows

use tao::window::Window;

/// Give the undecorated window whatever the platform needs to still look like
/// a top-level window (shadow, rounded corners).
pub fn configure_window(window: &Window) {
    #[cfg(target_os = "windows")]
    configure_windows(window);

    #[cfg(not(target_os = "windows"))]
    let _ = window;
}

#[cfg(target_os = "windows")]
fn configure_windows(window: &Window) {
    use tao::platform::windows::WindowExtWindows;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
    use windows::Win32::UI::Controls::MARGINS;

    // A one-pixel frame is enough for DWM to draw the drop shadow.
    unsafe {
        let hwnd = window.hwnd();
        let margins = MARGINS {
            cxLeftWidth: 1,
            cxRightWidth: 1,
            cyTopHeight: 1,
            cyBottomHeight: 1,
        };
        if let Err(e) = DwmExtendFrameIntoClientArea(HWND(hwnd as _), &margins) {
            log::warn!("Failed to extend frame for window shadow: {}", e);
        }
    }
}
