//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::Span;

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnRequestFn = fn(&Request<Body>, &Span);
type OnResponseFn = fn(&Response<Body>, Duration, &Span);

/// Layer type produced by [`layer`].
pub type RequestLogLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn, OnRequestFn, OnResponseFn>;

/// Creates the request log middleware.
///
/// Every request gets an `INFO` span carrying its method and path; the
/// response is logged inside that span with the status code and latency.
///
/// # Example Logs
///
/// ```text
/// DEBUG request{method=POST path=/shorturls}: Processing request
/// INFO request{method=POST path=/shorturls}: Response sent status=201 latency_ms=0
/// INFO request{method=GET path=/abcd}: Response sent status=307 latency_ms=0
/// ```
pub fn layer() -> RequestLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_request(on_request as OnRequestFn)
        .on_response(on_response as OnResponseFn)
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::debug!("Processing request");
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "Response sent"
    );
}
