//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use cloudfoundry_client::error::TransportError;
use cloudfoundry_client::{
    AuthMethod, CallDescriptor, ClientConfig, CloudFoundryClient, RawResponse, Transport,
};
use reqwest::header::HeaderMap;
use url::Url;
use wiremock::MockServer;

/// Creates a client that talks to the mock server with a fixed token.
pub fn client_for(server: &MockServer) -> CloudFoundryClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    let config = ClientConfig::builder(base_url)
        .auth(AuthMethod::BearerToken("test-token".to_string()))
        .build();
    CloudFoundryClient::new(config).unwrap()
}

/// A transport that answers every call with the same canned response and
/// records what it was asked to send.
#[derive(Debug, Clone)]
pub struct StubTransport {
    status: u16,
    body: Bytes,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<CallDescriptor>>>,
}

impl StubTransport {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<CallDescriptor> {
        self.seen.lock().unwrap().clone()
    }

    pub fn client(&self) -> CloudFoundryClient<StubTransport> {
        CloudFoundryClient::with_transport(
            Url::parse("https://api.example.com").unwrap(),
            self.clone(),
        )
    }
}

impl Transport for StubTransport {
    fn execute(
        &self,
        call: CallDescriptor,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(call);
        let response = RawResponse::new(self.status, HeaderMap::new(), self.body.clone());
        async move { Ok(response) }
    }
}
