//! Stub for platforms without a Win32 window station. There is nothing to
//! consult, so no handle is ever live and reordering is unsupported.

use crate::{WindowHandle, WindowSinkError, WindowSinkResult};

pub fn is_window(_handle: WindowHandle) -> bool {
    false
}

pub fn send_to_bottom(_handle: WindowHandle) -> WindowSinkResult<()> {
    Err(WindowSinkError::Unsupported)
}

pub fn clear_topmost(_handle: WindowHandle) -> WindowSinkResult<()> {
    Err(WindowSinkError::Unsupported)
}
