//! Notifier Adapters.
//!
//! - `TracingNotifier` - Logs notifications
//! - `RecordingNotifier` - Keeps notifications in memory for tests and hosts that poll

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
