use crate::error::ServerError;
use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;

/// Form field carrying the tunneled verb.
const OVERRIDE_FIELD: &str = "_method";

/// Form bodies here are a handful of short fields; anything larger is not one
/// of ours and is passed through untouched by failing the sniff.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Method override middleware: HTML forms can only emit GET/POST, so update
/// and delete submissions arrive as POST with a `_method` field naming the
/// real verb. This must be layered around the whole router (before route
/// matching), otherwise the rewritten method has no effect.
pub async fn method_override(request: Request, next: Next) -> Result<Response, ServerError> {
    if request.method() != Method::POST || !is_urlencoded(&request) {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if let Some(verb) = override_verb(&bytes) {
        parts.method = verb;
    }

    // hand the buffered body back so Form extraction still works downstream
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

fn is_urlencoded(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

fn override_verb(bytes: &[u8]) -> Option<Method> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes).ok()?;
    let value = pairs.into_iter().find(|(key, _)| key == OVERRIDE_FIELD)?.1;
    match value.as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Logging middleware
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        "request completed"
    );

    response
}
