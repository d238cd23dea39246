use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Methods advertised to preflight requests when every method is allowed.
pub const PREFLIGHT_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// How long browsers may cache a preflight answer.
pub const DEFAULT_MAX_AGE_SECS: u32 = 600;

fn wildcard() -> HeaderValue {
    HeaderValue::from_static("*")
}

/// Cross-origin policy applied to every response the service produces.
///
/// Any origin, any method and any header are allowed. The policy itself only
/// decides whether credentialed requests are accepted and how long a
/// preflight answer stays valid.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    pub allow_credentials: bool,
    pub max_age_secs: u32,
}

/// The parts of an incoming request the response decorators depend on.
#[derive(Debug, Clone, Default)]
pub struct RequestFacts {
    pub origin: Option<HeaderValue>,
    pub has_cookie: bool,
}

impl RequestFacts {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        RequestFacts {
            origin: headers.get(header::ORIGIN).cloned(),
            has_cookie: headers.contains_key(header::COOKIE),
        }
    }
}

/// A function that adds one piece of the policy to a response.
pub type Decorator = fn(&CorsPolicy, &RequestFacts, &mut HeaderMap);

/// Decorators run, in order, on every non-preflight response.
pub const RESPONSE_DECORATORS: &[Decorator] = &[
    allow_origin,
    allow_methods,
    allow_headers,
    allow_credentials,
];

fn allow_origin(policy: &CorsPolicy, facts: &RequestFacts, headers: &mut HeaderMap) {
    // Browsers refuse `*` on credentialed requests, so echo the caller instead.
    match (&facts.origin, policy.allow_credentials && facts.has_cookie) {
        (Some(origin), true) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }
        _ => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, wildcard());
        }
    }
}

fn allow_methods(_policy: &CorsPolicy, _facts: &RequestFacts, headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, wildcard());
}

fn allow_headers(_policy: &CorsPolicy, _facts: &RequestFacts, headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, wildcard());
}

fn allow_credentials(policy: &CorsPolicy, _facts: &RequestFacts, headers: &mut HeaderMap) {
    if policy.allow_credentials {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
}

impl CorsPolicy {
    /// Any origin, any method, any header, credentials allowed.
    pub fn permissive() -> Self {
        CorsPolicy {
            allow_credentials: true,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }

    /// Apply every response decorator to `headers`.
    pub fn decorate(&self, facts: &RequestFacts, headers: &mut HeaderMap) {
        for decorator in RESPONSE_DECORATORS {
            decorator(self, facts, headers);
        }
    }

    pub fn is_preflight(&self, method: &Method, headers: &HeaderMap) -> bool {
        *method == Method::OPTIONS
            && headers.contains_key(header::ORIGIN)
            && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    /// Answer a preflight request without consulting the router.
    pub fn preflight_response(&self, request_headers: &HeaderMap) -> Response {
        let mut response = (StatusCode::OK, "OK").into_response();
        let headers = response.headers_mut();

        // The preflight is checked against the credentials mode of the real
        // request, which forbids a wildcard origin.
        let allowed_origin = match request_headers.get(header::ORIGIN) {
            Some(origin) if self.allow_credentials => origin.clone(),
            _ => wildcard(),
        };
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(PREFLIGHT_METHODS),
        );

        let requested_headers = request_headers
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or(wildcard());
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested_headers);

        if self.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from(self.max_age_secs),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));

        response
    }
}

/// Middleware enforcing the cross-origin policy on every route and fallback.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    if policy.is_preflight(request.method(), request.headers()) {
        tracing::debug!("Answering CORS preflight for {}", request.uri().path());
        return policy.preflight_response(request.headers());
    }

    let facts = RequestFacts::from_headers(request.headers());
    let mut response = next.run(request).await;
    policy.decorate(&facts, response.headers_mut());
    response
}
