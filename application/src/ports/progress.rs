//! Progress notification port
//!
//! Lets the presentation layer observe a generation attempt as it runs:
//! a start signal while waiting on the remote call, one callback per text
//! fragment for incremental rendering, and an end signal.

/// Receives progress callbacks during story generation.
pub trait ProgressNotifier: Send + Sync {
    /// The streaming exchange has started; no fragment has arrived yet.
    fn on_stream_start(&self);

    /// One text fragment has been appended to the response buffer.
    fn on_chunk(&self, text: &str);

    /// The stream has ended (successfully or not).
    fn on_stream_end(&self);
}

/// No-op implementation for tests and quiet mode.
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stream_start(&self) {}
    fn on_chunk(&self, _text: &str) {}
    fn on_stream_end(&self) {}
}
