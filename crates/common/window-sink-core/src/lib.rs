mod error;
mod handle;
mod options;

pub use error::{WindowSinkError, WindowSinkResult};
pub use handle::WindowHandle;
pub use options::SinkOptions;
