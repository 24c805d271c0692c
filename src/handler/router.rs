//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, and mapping café lookup results onto responses.

use crate::cafe::{self, CafeQuery};
use crate::config::AppState;
use crate::http::{self, ResponseHeaders};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};

/// Path of the café lookup endpoint
pub const CAFE_PATH: &str = "/cafe";

/// Main entry point for HTTP request handling
///
/// Only request line and headers are inspected, the body is never read.
pub fn handle_request<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let method = req.method();
    let is_head = *method == Method::HEAD;
    let headers = ResponseHeaders {
        server_name: &state.config.http.server_name,
        enable_cors: state.config.http.enable_cors,
    };

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, headers) {
        return resp;
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size, headers) {
        return resp;
    }

    // 3. Dispatch on path
    let path = req.uri().path();
    let health = &state.config.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return http::build_health_response("ok", headers);
    }

    if path == CAFE_PATH {
        return serve_cafes(req.uri().query(), is_head, state, headers);
    }

    http::build_404_response(headers)
}

/// Run the café lookup and map its outcome to a status and body
fn serve_cafes(
    query: Option<&str>,
    is_head: bool,
    state: &AppState,
    headers: ResponseHeaders<'_>,
) -> Response<Full<Bytes>> {
    let query = CafeQuery::parse(query);
    let (status, body) = match cafe::handle_query(&query, &state.directory) {
        Ok(list) => (StatusCode::OK, list.to_body()),
        Err(err) => (err.status(), err.to_string()),
    };

    http::build_text_response(status, body, is_head, headers)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, headers: ResponseHeaders<'_>) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(headers)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response(headers))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(
    req: &Request<B>,
    max_body_size: u64,
    headers: ResponseHeaders<'_>,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response(headers))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
