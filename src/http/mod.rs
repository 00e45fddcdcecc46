pub mod middleware;
pub mod router;

use crate::cli::Args;
use ::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn init(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring the malformed CORS origin `{}`.", origin);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            HeaderName::from_static("user-agent"),
            HeaderName::from_static("sec-fetch-mode"),
            HeaderName::from_static("referer"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
            HeaderName::from_static("content-type"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}
