//! Mock API Transport for testing.
//!
//! Provides a scripted in-memory implementation of the ApiTransport port,
//! allowing tests to run without an API server.
//!
//! # Features
//!
//! - Pre-configured JSON replies per method and endpoint
//! - Simulated latency per reply for race testing
//! - Failure injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_get(Endpoint::Collection(EntityKind::Party), json!([]))
//!     .with_get_delayed(Endpoint::Proposal(id), proposal_json, Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ApiFailure, ApiTransport, Endpoint, HttpMethod};

/// Mock transport for testing.
///
/// Each route keeps a queue of replies consumed in order; the last reply of a
/// route is sticky and answers every further call. Unscripted routes answer
/// with a 404 status failure, like the real server would.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(HttpMethod, Endpoint), VecDeque<MockReply>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A configured reply.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub outcome: Result<Value, ApiFailure>,
    pub delay: Duration,
}

/// A request the transport received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub endpoint: Endpoint,
    pub body: Option<Value>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful GET reply.
    pub fn with_get(self, endpoint: Endpoint, body: Value) -> Self {
        self.with_reply(HttpMethod::Get, endpoint, Ok(body), Duration::ZERO)
    }

    /// Adds a successful GET reply that arrives after `delay`.
    pub fn with_get_delayed(self, endpoint: Endpoint, body: Value, delay: Duration) -> Self {
        self.with_reply(HttpMethod::Get, endpoint, Ok(body), delay)
    }

    /// Adds a successful POST reply.
    pub fn with_post(self, endpoint: Endpoint, body: Value) -> Self {
        self.with_reply(HttpMethod::Post, endpoint, Ok(body), Duration::ZERO)
    }

    /// Adds a failing reply.
    pub fn with_failure(self, method: HttpMethod, endpoint: Endpoint, failure: ApiFailure) -> Self {
        self.with_reply(method, endpoint, Err(failure), Duration::ZERO)
    }

    /// Adds a fully configured reply.
    pub fn with_reply(
        self,
        method: HttpMethod,
        endpoint: Endpoint,
        outcome: Result<Value, ApiFailure>,
        delay: Duration,
    ) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, endpoint))
            .or_default()
            .push_back(MockReply { outcome, delay });
        self
    }

    /// Returns the number of calls made to this transport.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns recorded calls for one method and endpoint.
    pub fn calls_to(&self, method: HttpMethod, endpoint: Endpoint) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.endpoint == endpoint)
            .cloned()
            .collect()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn next_reply(&self, method: HttpMethod, endpoint: Endpoint) -> MockReply {
        let mut routes = self.routes.lock().unwrap();
        if let Some(queue) = routes.get_mut(&(method, endpoint)) {
            if queue.len() > 1 {
                if let Some(reply) = queue.pop_front() {
                    return reply;
                }
            }
            if let Some(reply) = queue.front() {
                return reply.clone();
            }
        }
        MockReply {
            outcome: Err(ApiFailure::status(404, "{\"detail\":\"Not Found\"}")),
            delay: Duration::ZERO,
        }
    }

    async fn respond(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        body: Option<Value>,
    ) -> Result<Value, ApiFailure> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: *endpoint,
            body,
        });

        let reply = self.next_reply(method, *endpoint);
        if !reply.delay.is_zero() {
            sleep(reply.delay).await;
        }
        reply.outcome
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, ApiFailure> {
        self.respond(HttpMethod::Get, endpoint, None).await
    }

    async fn post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value, ApiFailure> {
        self.respond(HttpMethod::Post, endpoint, Some(body.clone()))
            .await
    }
}
