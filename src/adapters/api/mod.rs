//! API Transport Adapters.
//!
//! - `ReqwestTransport` - HTTP transport used in production
//! - `MockTransport` - Scripted in-memory transport for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::{MockReply, MockTransport, RecordedCall};
pub use reqwest_transport::ReqwestTransport;
