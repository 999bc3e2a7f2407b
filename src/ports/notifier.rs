//! Notifier Port - Interface for transient user notifications.
//!
//! Used for the success messages after starting a simulation or creating a
//! proposal. Failures are never reported through this port.

/// Port for showing a short message to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}
