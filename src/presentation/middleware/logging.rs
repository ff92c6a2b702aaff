//! Request Logging Middleware

use tower_http::trace::{HttpMakeClassifier, TraceLayer};

/// Create an HTTP trace layer for request/response logging
pub fn create_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
