//! Ordered request pipeline wrapped around the router.

use axum::{extract::Request, middleware::Next, response::Response, Router};
use std::time::Instant;
use tower_http::cors::CorsLayer;

/// Transforms a router, typically by adding a layer around it.
pub type Decorator = Box<dyn FnOnce(Router) -> Router + Send>;

/// Applies `decorators` so the first one listed is the outermost.
///
/// A request passes through the decorators in list order before reaching
/// the handler, and the response passes back through them in reverse.
pub fn decorate(router: Router, decorators: Vec<Decorator>) -> Router {
    decorators
        .into_iter()
        .rev()
        .fold(router, |inner, decorator| decorator(inner))
}

/// Request logging followed by permissive CORS.
pub fn default_pipeline() -> Vec<Decorator> {
    vec![logging(), cors()]
}

pub fn logging() -> Decorator {
    Box::new(|router: Router| router.layer(axum::middleware::from_fn(log_requests)))
}

pub fn cors() -> Decorator {
    Box::new(|router: Router| router.layer(CorsLayer::permissive()))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration = ?start.elapsed(),
        "HTTP request"
    );
    response
}
