//! Request dispatch module
//!
//! Entry point for HTTP request processing: reduces the hyper request to the
//! router's view, dispatches it, and writes the access log.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Every method is dispatched; the body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let path = req.uri().path();
    let is_head = *req.method() == Method::HEAD;
    let server_name = state.config.http.server_name.as_str();

    let request = http::Request::new(req.method().as_str(), path);

    let mut handler_name = None;
    let outcome = state.router.resolve(path).and_then(|resolution| {
        handler_name = Some(resolution.entry.name.clone());
        resolution.handle(&request)
    });

    let (response, status, body_bytes) = match outcome {
        Ok(resp) => (
            http::build_text_response(&resp, server_name, is_head),
            resp.status,
            resp.body.len(),
        ),
        Err(err) => error_response(&err, server_name, is_head),
    };

    if state.cached_access_log.load(Ordering::Relaxed) {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            request.method.clone(),
            request.path.clone(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = status;
        entry.body_bytes = if is_head { 0 } else { body_bytes };
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.handler = handler_name;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Map a routing failure to a client response
fn error_response(
    err: &RouteError,
    server_name: &str,
    is_head: bool,
) -> (Response<Full<Bytes>>, u16, usize) {
    if err.is_config_fault() {
        logger::log_error(&format!("Dispatch failed: {err}"));
        let resp = http::build_500_response(server_name, is_head);
        (resp, err.status(), "500 Internal Server Error".len())
    } else {
        let resp = http::build_404_response(server_name, is_head);
        (resp, err.status(), "404 Not Found".len())
    }
}

const fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routing::{Handler, RouteTable, Router};
    use crate::startup;
    use http_body_util::BodyExt;

    fn state_with(router: Router) -> Arc<AppState> {
        let mut config = Config::from_toml("").unwrap();
        config.logging.access_log = false;
        Arc::new(AppState::new(&config, router))
    }

    fn default_state() -> Arc<AppState> {
        let config = Config::from_toml("").unwrap();
        state_with(startup::build_router(&config.startup).unwrap())
    }

    async fn send(state: &Arc<AppState>, method: &str, uri: &str) -> (u16, String) {
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        let addr: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        let resp = handle_request(req, Arc::clone(state), addr).await.unwrap();
        let status = resp.status().as_u16();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_dispatch_variants() {
        let state = default_state();
        assert_eq!(send(&state, "GET", "/hello-servlet").await, (200, "hello servlet!".to_string()));
        assert_eq!(
            send(&state, "GET", "/spring/hello-spring").await,
            (200, "hello spring!".to_string())
        );
        assert_eq!(send(&state, "GET", "/hello-spring").await, (200, "hello spring!".to_string()));
        assert_eq!(send(&state, "POST", "/test?x=1").await, (200, "test".to_string()));
    }

    #[tokio::test]
    async fn test_not_found() {
        let mut table = RouteTable::new();
        table.register("/hello-servlet", Handler::text("hello")).unwrap();
        let state = state_with(Router::new(table));
        assert_eq!(send(&state, "GET", "/missing").await, (404, "404 Not Found".to_string()));
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let state = default_state();
        let (status, body) = send(&state, "HEAD", "/hello-servlet").await;
        assert_eq!(status, 200);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_ambiguous_route_is_server_error() {
        let mut table = RouteTable::new();
        table.add("a", Handler::text("a")).unwrap().add_mapping("/x/*").unwrap();
        table.add("b", Handler::text("b")).unwrap().add_mapping("/x/*").unwrap();
        let state = state_with(Router::new(table));
        assert_eq!(send(&state, "GET", "/x/y").await.0, 500);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(hyper::Version::HTTP_11), "1.1");
        assert_eq!(version_label(hyper::Version::HTTP_2), "2");
    }
}
