use tracing::debug;
use windows_sys::Win32::{
    Foundation::{GetLastError, HWND},
    UI::WindowsAndMessaging::{
        HWND_BOTTOM, HWND_NOTOPMOST, IsWindow, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSENDCHANGING,
        SWP_NOSIZE, SetWindowPos,
    },
};

use crate::{WindowHandle, WindowSinkError, WindowSinkResult};

fn as_hwnd(handle: WindowHandle) -> HWND {
    handle.as_raw() as HWND
}

/// Whether `handle` currently identifies a live window.
pub fn is_window(handle: WindowHandle) -> bool {
    let hwnd = as_hwnd(handle);
    !hwnd.is_null() && unsafe { IsWindow(hwnd) } != 0
}

/// Moves the window to the bottom of the z-order. SWP_NOMOVE, SWP_NOSIZE
/// and SWP_NOACTIVATE keep its position, size and focus untouched.
pub fn send_to_bottom(handle: WindowHandle) -> WindowSinkResult<()> {
    let res = unsafe {
        SetWindowPos(
            as_hwnd(handle),
            HWND_BOTTOM,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
        )
    };

    if res == 0 {
        return Err(WindowSinkError::SetWindowPos(unsafe { GetLastError() }));
    }

    debug!("{handle} moved to the bottom of the z-order");
    Ok(())
}

/// Drops the window out of the topmost band. Run before
/// [`send_to_bottom`] when the target may carry WS_EX_TOPMOST, which
/// otherwise makes HWND_BOTTOM a no-op.
pub fn clear_topmost(handle: WindowHandle) -> WindowSinkResult<()> {
    let res = unsafe {
        SetWindowPos(
            as_hwnd(handle),
            HWND_NOTOPMOST,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_NOSENDCHANGING,
        )
    };

    if res == 0 {
        return Err(WindowSinkError::SetWindowPos(unsafe { GetLastError() }));
    }

    debug!("{handle} dropped out of the topmost band");
    Ok(())
}
