//! Stateless dispatch through a [`Transport`].

use tracing::Instrument;

use crate::error::TransportError;
use crate::request::CallDescriptor;
use crate::transport::{RawResponse, Transport};

/// Sends call descriptors through a transport.
///
/// Holds nothing between calls, so one dispatcher serves any number of
/// concurrent invocations. The body of the response is passed through
/// untouched.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    /// Wraps a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the call and waits for the response.
    ///
    /// Dropping the returned future drops the transport's future with it,
    /// abandoning the call.
    ///
    /// ## Errors
    ///
    /// Returns the transport's error if no response was obtained.
    pub async fn dispatch(&self, call: CallDescriptor) -> Result<RawResponse, TransportError> {
        let mut in_flight = InFlight::new(&call);
        let span = tracing::debug_span!("dispatch", http.method = %call.method());
        let result = self.transport.execute(call).instrument(span).await;
        in_flight.complete();
        result
    }
}

/// Logs calls abandoned before the transport answered.
struct InFlight {
    target: String,
    completed: bool,
}

impl InFlight {
    fn new(call: &CallDescriptor) -> Self {
        Self {
            target: format!("{} {}", call.method(), call.url()),
            completed: false,
        }
    }

    fn complete(&mut self) {
        self.completed = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.completed {
            tracing::debug!(call = %self.target, "dispatch cancelled before a response arrived");
        }
    }
}
