//! HTTP response building module
//!
//! Provides builders for the status codes the service emits.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const ALLOW: &str = "GET, HEAD, OPTIONS";

/// Headers attached to every response built by this module
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders<'a> {
    pub server_name: &'a str,
    pub enable_cors: bool,
}

/// Start a response carrying the `Server` header and, when enabled, the CORS origin
fn base_builder(status: StatusCode, headers: ResponseHeaders<'_>) -> hyper::http::response::Builder {
    let builder = Response::builder()
        .status(status)
        .header("Server", headers.server_name);

    if headers.enable_cors {
        builder.header("Access-Control-Allow-Origin", "*")
    } else {
        builder
    }
}

/// Build a plain-text response; `HEAD` keeps `Content-Length` but drops the body
pub fn build_text_response(
    status: StatusCode,
    body: String,
    is_head: bool,
    headers: ResponseHeaders<'_>,
) -> Response<Full<Bytes>> {
    let content_length = body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(body)
    };

    base_builder(status, headers)
        .header("Content-Type", TEXT_PLAIN)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(headers: ResponseHeaders<'_>) -> Response<Full<Bytes>> {
    base_builder(StatusCode::NOT_FOUND, headers)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(headers: ResponseHeaders<'_>) -> Response<Full<Bytes>> {
    base_builder(StatusCode::METHOD_NOT_ALLOWED, headers)
        .header("Content-Type", TEXT_PLAIN)
        .header("Allow", ALLOW)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(headers: ResponseHeaders<'_>) -> Response<Full<Bytes>> {
    let mut builder = base_builder(StatusCode::NO_CONTENT, headers).header("Allow", ALLOW);

    if headers.enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", ALLOW)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response(headers: ResponseHeaders<'_>) -> Response<Full<Bytes>> {
    base_builder(StatusCode::PAYLOAD_TOO_LARGE, headers)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build liveness/readiness probe response
pub fn build_health_response(status: &str, headers: ResponseHeaders<'_>) -> Response<Full<Bytes>> {
    base_builder(StatusCode::OK, headers)
        .header("Content-Type", TEXT_PLAIN)
        .header("Cache-Control", "no-store")
        .body(Full::new(Bytes::from(status.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::from(status.to_string())))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    const HEADERS: ResponseHeaders<'static> = ResponseHeaders {
        server_name: "cafe-finder",
        enable_cors: false,
    };

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_text_response() {
        let resp = build_text_response(StatusCode::BAD_REQUEST, "count missing".to_string(), false, HEADERS);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["Content-Type"], TEXT_PLAIN);
        assert_eq!(resp.headers()["Content-Length"], "13");
        assert_eq!(resp.headers()["Server"], "cafe-finder");
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
        assert_eq!(body_string(resp).await, "count missing");
    }

    #[tokio::test]
    async fn test_text_response_head_and_cors() {
        let headers = ResponseHeaders {
            enable_cors: true,
            ..HEADERS
        };
        let resp = build_text_response(StatusCode::OK, "a,b".to_string(), true, headers);
        assert_eq!(resp.headers()["Content-Length"], "3");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(body_string(resp).await, "");
    }

    #[test]
    fn test_options_response() {
        let resp = build_options_response(HEADERS);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["Allow"], ALLOW);
        assert_eq!(resp.headers()["Server"], "cafe-finder");
        assert!(resp.headers().get("Access-Control-Allow-Methods").is_none());

        let cors = ResponseHeaders {
            enable_cors: true,
            ..HEADERS
        };
        let resp = build_options_response(cors);
        assert_eq!(resp.headers()["Access-Control-Allow-Methods"], ALLOW);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response(HEADERS).status(), StatusCode::NOT_FOUND);
        assert_eq!(build_405_response(HEADERS).status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(build_413_response(HEADERS).status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(build_health_response("ok", HEADERS).status(), StatusCode::OK);
    }
}
