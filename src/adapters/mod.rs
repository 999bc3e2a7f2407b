//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the client core to external systems:
//! - `api` - Legislature API transports (HTTP, scripted mock)
//! - `notify` - User notification sinks

pub mod api;
pub mod notify;

pub use api::{MockTransport, ReqwestTransport};
pub use notify::{RecordingNotifier, TracingNotifier};
