use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use rbac_core::proto::identity::{Identity, resolve_identity};

use crate::dto::response::ErrorResponse;
use crate::metrics;
use crate::router::AppState;

/// Caller of the current request, resolved once from the bearer token
#[derive(Debug, Clone)]
pub struct Authorized {
    pub identity: Identity,
}

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

pub(crate) async fn bearer_check(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<axum::response::Response, ErrorResponse> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        tracing::warn!("Authorization header not found.");
        return Err(ErrorResponse::Unauthorized);
    };

    let mut split = auth_header.split(' ');
    let auth_type = split.next().unwrap_or_default();
    let token = split.next().unwrap_or_default();

    if auth_type != "Bearer" {
        tracing::warn!("Could not authorize request. Incorrect authorization method.");
        return Err(ErrorResponse::Unauthorized);
    }

    let claims = match state.token_authority.verify(token) {
        Ok(claims) => claims,
        Err(error) => {
            tracing::warn!(%error, "Could not authorize request.");
            return Err(ErrorResponse::Unauthorized);
        }
    };

    let identity = resolve_identity(claims.sub, claims.roles);
    tracing::debug!(subject = %identity.subject, roles = ?identity.roles, "Request authorized");

    request.extensions_mut().insert(Authorized { identity });
    Ok(next.run(request).await)
}

pub(crate) async fn metrics_counter(request: Request<Body>, next: Next) -> axum::response::Response {
    let start = Instant::now();
    let response = next.run(request).await;
    metrics::track_request_count_and_time(start.elapsed().as_secs_f64());
    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let session_id = headers
        .get("x-session-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        session_id,
    }
}
