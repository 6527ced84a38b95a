//! HTTP response building module
//!
//! Builds hyper responses for dispatched handler output and for routing failures.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::message;

/// Build a text response from dispatched handler output
pub fn build_text_response(
    resp: &message::Response,
    server_name: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = resp.body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(resp.body.clone())
    };

    Response::builder()
        .status(resp.status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&resp.status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(server_name: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(404, "404 Not Found", server_name, is_head)
}

/// Build 500 Internal Server Error response
pub fn build_500_response(server_name: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_status_response(500, "500 Internal Server Error", server_name, is_head)
}

fn build_status_response(
    status: u16,
    text: &'static str,
    server_name: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(text.as_bytes())
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from_static(text.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
