//! Progress-callback trait for conversion lifecycle events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to observe a
//! conversion as it runs.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a task-status record in a database, a WebSocket, or a
//! terminal spinner — without the library knowing anything about how the host
//! application communicates. The trait is `Send + Sync` so a single callback
//! can be shared across conversions running on separate tasks.
//!
//! # Progress scale
//!
//! Events carry a fraction in `[-1, 1]`. A conversion is one network round
//! trip, so only three values ever occur: [`PROGRESS_STARTED`] just before
//! the upload, [`PROGRESS_DONE`] on success, and [`PROGRESS_FAILED`] on any
//! failure (the message then carries the error text, including the response
//! body for HTTP errors). The scale leaves room for host pipelines that
//! treat PDF conversion as one step of a longer job.

use std::sync::Arc;

/// Reported just before the upload request is sent.
pub const PROGRESS_STARTED: f32 = 0.15;

/// Reported when Gotenberg answered 200 and the PDF bytes are in hand.
pub const PROGRESS_DONE: f32 = 0.2;

/// Reported when the conversion failed for any reason.
pub const PROGRESS_FAILED: f32 = -1.0;

/// Called by the conversion functions as a request progresses.
///
/// Implementations must be `Send + Sync` (callers may share one callback
/// across concurrent conversions). The method has a default no-op
/// implementation so `Arc<NoopProgressCallback>` and custom impls behave
/// identically when events are not needed.
pub trait ConversionProgressCallback: Send + Sync {
    /// Receive a progress event.
    ///
    /// # Arguments
    /// * `progress` — fraction in `[-1, 1]`; `-1.0` signals failure
    /// * `message`  — human-readable description of the event
    fn on_progress(&self, progress: f32, message: &str) {
        let _ = (progress, message);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingCallback {
        events: Mutex<Vec<(f32, String)>>,
    }

    impl ConversionProgressCallback for RecordingCallback {
        fn on_progress(&self, progress: f32, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push((progress, message.to_string()));
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_progress(PROGRESS_STARTED, "Converting Office document to PDF...");
        cb.on_progress(PROGRESS_DONE, "done");
        cb.on_progress(PROGRESS_FAILED, "some error");
    }

    #[test]
    fn recording_callback_receives_events() {
        let cb = RecordingCallback {
            events: Mutex::new(Vec::new()),
        };
        cb.on_progress(PROGRESS_STARTED, "start");
        cb.on_progress(PROGRESS_FAILED, "connection refused");

        let events = cb.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, PROGRESS_STARTED);
        assert_eq!(events[1].0, PROGRESS_FAILED);
        assert!(events[1].1.contains("connection refused"));
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ConversionProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_progress(PROGRESS_STARTED, "start");
    }
}
