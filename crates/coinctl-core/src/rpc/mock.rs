use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::TransportError;

use super::protocol::RequestEnvelope;
use super::Transport;

/// A mock transport for testing. Replays canned outcomes in order and
/// records every envelope it was asked to send.
pub struct MockTransport {
    outcomes: RefCell<VecDeque<Result<serde_json::Value, TransportError>>>,
    sent: RefCell<Vec<RequestEnvelope>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            outcomes: VecDeque::new(),
        }
    }

    /// Envelopes sent so far, oldest first.
    pub fn sent(&self) -> Vec<RequestEnvelope> {
        self.sent.borrow().clone()
    }

    pub fn last_sent(&self) -> Option<RequestEnvelope> {
        self.sent.borrow().last().cloned()
    }
}

pub struct MockTransportBuilder {
    outcomes: VecDeque<Result<serde_json::Value, TransportError>>,
}

impl MockTransportBuilder {
    /// Queue a successful response envelope `{"result": .., "error": null}`.
    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.outcomes.push_back(Ok(serde_json::json!({
            "result": result,
            "error": null,
            "id": "mock",
        })));
        self
    }

    /// Queue a raw response document, for malformed-envelope cases.
    pub fn with_document(mut self, document: serde_json::Value) -> Self {
        self.outcomes.push_back(Ok(document));
        self
    }

    pub fn with_status(mut self, status: u16, reason: &str) -> Self {
        self.outcomes.push_back(Err(TransportError::Status {
            status,
            reason: reason.to_owned(),
        }));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            outcomes: RefCell::new(self.outcomes),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &RequestEnvelope) -> Result<serde_json::Value, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::InvalidBody("no canned response left".into())))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rpc::protocol::build_request;

    #[test]
    fn replays_outcomes_in_order() {
        let transport = MockTransport::builder()
            .with_result(json!(1))
            .with_status(500, "Internal Server Error")
            .build();

        let first = transport
            .send(&build_request("getblockcount", Vec::new()))
            .expect("first outcome is a result");
        assert_eq!(first["result"], 1);

        let second = transport
            .send(&build_request("getblockcount", Vec::new()))
            .expect_err("second outcome is a failure");
        assert!(matches!(second, TransportError::Status { status: 500, .. }));

        assert!(transport
            .send(&build_request("getblockcount", Vec::new()))
            .is_err());
        assert_eq!(transport.sent().len(), 3);
    }
}
