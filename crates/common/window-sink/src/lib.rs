pub use window_sink_core::*;

mod sink;

pub use sink::sink_window;

#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(not(target_os = "windows"))]
#[path = "unsupported/mod.rs"]
mod platform;

// For platform specific util API's
pub use platform::utils;
