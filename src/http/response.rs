//! HTTP response building module
//!
//! Provides builders for the success and not-found responses, decoupled from request handling.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Content type of every successful response
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of every not-found response
pub const NOT_FOUND_BODY: &str = "File not found";

/// Build 200 OK response carrying raw file bytes
pub fn build_json_response(data: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .body(Full::new(data))
        .unwrap_or_else(|e| not_found_after_build_error("200", &e))
}

/// Build 404 Not Found response
///
/// Carries no `Content-Type` header.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        })
}

/// A 200 must carry the file, so a failed 200 build degrades to not-found
fn not_found_after_build_error(status: &str, error: &hyper::http::Error) -> Response<Full<Bytes>> {
    log_build_error(status, error);
    build_404_response()
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_json_response() {
        let resp = build_json_response(Bytes::from_static(b"{\"a\":1}"));
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"{\"a\":1}");
    }

    #[tokio::test]
    async fn test_failed_build_degrades_to_404() {
        let err = Response::builder().status(1000).body(()).unwrap_err();
        let resp = not_found_after_build_error("200", &err);
        assert_eq!(resp.status(), 404);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"File not found");
    }

    #[tokio::test]
    async fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get("content-type").is_none());

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"File not found");
    }
}
