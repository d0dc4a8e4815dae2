/// Callback surface for long-running chunking operations.
///
/// Implementations are fire-and-forget from the chunker's point of view:
/// status lines are human-readable and cancellation is polled only at chunk
/// boundaries, never mid-split.
pub trait ProgressSink {
    /// Receive a human-readable status line.
    fn report(&self, message: &str);

    /// Whether the caller has requested cancellation.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Sink that ignores reports and never cancels.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _message: &str) {}
}
