use std::time::Duration;

use axum::http::{
    header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
    HeaderValue, Method,
};
use tower_http::cors::CorsLayer;

use crate::error::{Error, Result};

/// Accepts cross-origin requests from `origin` only; preflights are cached for `max_age`.
pub fn single_origin_cors(origin: &str, max_age: Duration) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| Error::Config(format!("Invalid CORS origin {}: {}", origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_LENGTH, CONTENT_TYPE, ACCEPT])
        .max_age(max_age))
}
