//! Notifier that writes user messages to the log.

use crate::ports::Notifier;

/// Emits every notification as an `info` event; useful for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "parliament_client::notify", "{}", message);
    }
}
