//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the client core and the outside world. Adapters implement these ports.
//!
//! - `ApiTransport` - JSON exchange with the legislature API
//! - `Notifier` - Transient user-facing messages

mod api_transport;
mod notifier;

pub use api_transport::{ApiFailure, ApiTransport, Endpoint, FailureKind, HttpMethod};
pub use notifier::Notifier;
