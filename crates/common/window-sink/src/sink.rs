use tracing::debug;

use crate::platform::utils;
use crate::{SinkOptions, WindowHandle, WindowSinkError, WindowSinkResult};

/// Moves `handle` to the bottom of the z-order, leaving its position, size
/// and activation state untouched.
///
/// The handle is validated first; a handle that does not name a live window
/// is rejected before any reordering is attempted.
///
/// # Errors
///
/// Returns [`WindowSinkError::InvalidHandle`] if `handle` does not identify
/// a live window, or [`WindowSinkError::SetWindowPos`] with the OS error
/// code if the reposition call fails.
pub fn sink_window(handle: WindowHandle, options: &SinkOptions) -> WindowSinkResult<()> {
    if !utils::is_window(handle) {
        debug!("{handle} does not identify a live window");
        return Err(WindowSinkError::InvalidHandle);
    }

    if options.clear_topmost {
        utils::clear_topmost(handle)?;
    }

    utils::send_to_bottom(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_rejected_before_any_os_call() {
        let err = sink_window(WindowHandle::NULL, &SinkOptions::default()).unwrap_err();
        assert!(matches!(err, WindowSinkError::InvalidHandle));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn no_handle_is_live_off_windows() {
        let handle = WindowHandle::from_hex("20476");
        assert!(!utils::is_window(handle));
        let err = sink_window(handle, &SinkOptions::default()).unwrap_err();
        assert!(matches!(err, WindowSinkError::InvalidHandle));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn sinking_is_unsupported_off_windows() {
        let err = utils::send_to_bottom(WindowHandle::from_hex("20476")).unwrap_err();
        assert!(matches!(err, WindowSinkError::Unsupported));
    }
}
