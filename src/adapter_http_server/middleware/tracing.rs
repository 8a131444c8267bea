use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{
        DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
    },
};

pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    SpanCreator,
    EventBuilder,
    EventBuilder,
    DefaultOnBodyChunk,
    DefaultOnEos,
    EventBuilder,
> {
    TraceLayer::new_for_http()
        .make_span_with(SpanCreator)
        .on_request(EventBuilder)
        .on_response(EventBuilder)
        .on_failure(EventBuilder)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct SpanCreator;

impl<B> MakeSpan<B> for SpanCreator {
    fn make_span(&mut self, req: &http::Request<B>) -> tracing::Span {
        let uri = req.uri();
        let span = tracing::info_span!(
            parent: None,
            "http.server.request",
            "error.type" = tracing::field::Empty,
            "exception.message" = tracing::field::Empty,
            "http.request.method" = %req.method(),
            "http.response.status_code" = tracing::field::Empty,
            "network.protocol.version" = ?req.version(),
            "span.kind" = "server",
            "url.path" = uri.path(),
            "url.query" = tracing::field::Empty,
        );
        if let Some(query) = uri.query() {
            span.record("url.query", query);
        }
        span
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct EventBuilder;

impl<B> OnRequest<B> for EventBuilder {
    fn on_request(&mut self, _req: &http::Request<B>, _span: &tracing::Span) {
        tracing::debug!("request started");
    }
}

impl<B> OnResponse<B> for EventBuilder {
    fn on_response(
        self,
        res: &http::Response<B>,
        latency: std::time::Duration,
        span: &tracing::Span,
    ) {
        span.record("http.response.status_code", res.status().as_str());
        tracing::info!(latency_ms = latency.as_millis(), "request processed");
    }
}

impl<F> OnFailure<F> for EventBuilder
where
    F: std::fmt::Display,
{
    fn on_failure(
        &mut self,
        failure_classification: F,
        latency: std::time::Duration,
        span: &tracing::Span,
    ) {
        span.record("error.type", "server");
        span.record("exception.message", failure_classification.to_string());
        tracing::warn!(
            error = %failure_classification,
            latency_ms = latency.as_millis(),
            "response failed",
        );
    }
}
