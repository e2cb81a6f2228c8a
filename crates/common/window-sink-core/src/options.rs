use bon::bon;

#[derive(Debug, Clone, Default)]
pub struct SinkOptions {
    /// Drop the window out of the topmost band before sinking it. A
    /// WS_EX_TOPMOST window ignores a plain HWND_BOTTOM pass.
    pub clear_topmost: bool,
}

#[bon]
impl SinkOptions {
    /// Creates sink options using the builder pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use window_sink_core::SinkOptions;
    ///
    /// // Default: a single HWND_BOTTOM pass
    /// let options = SinkOptions::builder().build();
    ///
    /// // Clear WS_EX_TOPMOST first
    /// let options = SinkOptions::builder().clear_topmost(true).build();
    /// ```
    #[builder]
    pub fn new(#[builder(default)] clear_topmost: bool) -> Self {
        Self { clear_topmost }
    }
}
