//! Notifier that remembers messages for later inspection.

use std::sync::{Arc, Mutex};

use crate::ports::Notifier;

/// Collects notifications in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message shown so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clones_share_history() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        notifier.notify("hello");
        assert_eq!(handle.messages(), vec!["hello"]);
    }
}
