use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowSinkError {
    #[error("Invalid window handle.")]
    InvalidHandle,

    #[error("SetWindowPos failed with error: {0}")]
    SetWindowPos(u32),

    #[error("Unsupported")]
    Unsupported,
}

pub type WindowSinkResult<T> = Result<T, WindowSinkError>;
