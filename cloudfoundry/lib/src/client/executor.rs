//! The invocation facade: the one entry point applications call.

use futures::Stream;
use tracing::field::{self, Empty};
use tracing::{Span, instrument};
use url::Url;

use super::{Dispatcher, Stage};
use crate::config::ClientConfig;
use crate::error::{ConfigError, InvocationError};
use crate::request::{Operation, build};
use crate::response::{Classification, ResponseFormat, classify, map_error};
use crate::transport::{ReqwestTransport, Transport};
use crate::v2::applications::Applications;
use crate::v2::organizations::Organizations;
use crate::v2::service_usage_events::ServiceUsageEvents;

/// The value an operation delivers on success.
pub type OperationOutput<O> = <<O as Operation>::Format as ResponseFormat>::Output;

/// Client for the Cloud Controller v2 API.
///
/// The client holds no per-call state. A single instance may run any number
/// of invocations concurrently, and wrapping it in an `Arc` is enough to
/// share it across tasks.
#[derive(Debug, Clone)]
pub struct CloudFoundryClient<T: Transport = ReqwestTransport> {
    base_url: Url,
    dispatcher: Dispatcher<T>,
}

impl CloudFoundryClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config.base_url().clone(), transport))
    }

    /// Creates a client from `CF_API_URL`, `CF_ACCESS_TOKEN` and
    /// `CF_TIMEOUT_SECS`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the environment is incomplete or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> CloudFoundryClient<T> {
    /// Creates a client that sends every call through `transport`.
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            dispatcher: Dispatcher::new(transport),
        }
    }

    /// Returns the API root requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    /// Organization operations.
    pub fn organizations(&self) -> Organizations<'_, T> {
        Organizations::new(self)
    }

    /// Application operations.
    pub fn applications(&self) -> Applications<'_, T> {
        Applications::new(self)
    }

    /// Service usage event operations.
    pub fn service_usage_events(&self) -> ServiceUsageEvents<'_, T> {
        ServiceUsageEvents::new(self)
    }

    /// Runs one operation and delivers its decoded result.
    ///
    /// Invalid requests fail before anything is sent. Responses with a 2xx
    /// status are decoded with the operation's format; any other status is
    /// turned into an [`ApiError`](crate::error::ApiError).
    ///
    /// The returned future is lazy and does nothing until polled. Dropping
    /// it abandons the call.
    ///
    /// ## Errors
    ///
    /// Returns exactly one [`InvocationError`] describing why no value was
    /// delivered.
    #[instrument(
        name = "cf_invocation",
        skip_all,
        fields(
            cf.operation = Empty,
            http.method = Empty,
            http.url = Empty,
            http.status_code = Empty,
            otel.kind = "client",
            otel.status_code = Empty,
        )
    )]
    pub async fn invoke<O: Operation>(
        &self,
        request: O,
    ) -> Result<OperationOutput<O>, InvocationError> {
        let span = Span::current();
        {
            let endpoint = O::endpoint();
            span.record("cf.operation", endpoint.id());
            span.record("http.method", field::display(endpoint.method()));
        }
        enter(Stage::Created);

        let result = self.run(request, &span).await;
        span.record("otel.status_code", if result.is_ok() { "OK" } else { "ERROR" });
        result
    }

    /// Runs one operation as a single-item stream.
    ///
    /// The stream yields exactly one item: the same value or error
    /// [`invoke`](Self::invoke) would return. Nothing is sent until the
    /// stream is first polled.
    pub fn invoke_stream<O: Operation>(
        &self,
        request: O,
    ) -> impl Stream<Item = Result<OperationOutput<O>, InvocationError>> + Send {
        futures::stream::once(self.invoke(request))
    }

    async fn run<O: Operation>(
        &self,
        request: O,
        span: &Span,
    ) -> Result<OperationOutput<O>, InvocationError> {
        enter(Stage::Validating);
        if let Err(e) = request.validate().into_result() {
            enter(Stage::Invalid);
            return Err(e.into());
        }

        enter(Stage::Dispatching);
        let call = build(&self.base_url, &request).inspect_err(|_| enter(Stage::Failed))?;
        span.record("http.url", call.url().as_str());

        let response = self
            .dispatcher
            .dispatch(call)
            .await
            .inspect_err(|_| enter(Stage::TransportFailed))?;
        span.record("http.status_code", response.status());

        enter(Stage::Classifying);
        match classify(response, <O::Format as ResponseFormat>::SHAPE) {
            Classification::Success { body, .. } => {
                enter(Stage::Decoding);
                let value = <O::Format as ResponseFormat>::parse(body).inspect_err(|e| {
                    tracing::debug!(error = %e, "success body did not decode");
                    enter(Stage::Failed);
                })?;
                enter(Stage::Delivered);
                Ok(value)
            }
            Classification::Failure { status, body } => {
                enter(Stage::ErrorMapping);
                let error = map_error(status, &body);
                enter(Stage::Failed);
                Err(error.into())
            }
        }
    }
}

fn enter(stage: Stage) {
    tracing::debug!(stage = %stage, "invocation stage");
}
