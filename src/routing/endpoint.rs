//! Handler kinds
//!
//! A route resolves to either a terminal endpoint or a nested router
//! (the MVC dispatcher case).

use std::fmt;
use std::sync::Arc;

use super::error::RouteError;
use super::router::Router;
use crate::http::{Request, Response};

/// Terminal request handler
///
/// Invoked concurrently from request tasks, so implementations must be `Send + Sync`.
pub trait Endpoint: Send + Sync {
    fn handle(&self, req: &Request) -> Response;
}

impl<F> Endpoint for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, req: &Request) -> Response {
        self(req)
    }
}

/// Endpoint that always answers with the same body
#[derive(Debug, Clone)]
pub struct TextEndpoint {
    body: String,
}

impl TextEndpoint {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Endpoint for TextEndpoint {
    fn handle(&self, _req: &Request) -> Response {
        Response::ok(self.body.clone())
    }
}

#[derive(Clone)]
pub enum Handler {
    Endpoint(Arc<dyn Endpoint>),
    /// Forwards to a nested router after stripping the matched prefix
    Dispatcher(Arc<Router>),
}

impl Handler {
    pub fn endpoint(endpoint: impl Endpoint + 'static) -> Self {
        Self::Endpoint(Arc::new(endpoint))
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self::endpoint(TextEndpoint::new(body))
    }

    pub fn dispatcher(router: Router) -> Self {
        Self::Dispatcher(Arc::new(router))
    }

    /// Handle `req` whose path is already relative to this handler's mapping
    pub fn handle(&self, req: &Request) -> Result<Response, RouteError> {
        match self {
            Self::Endpoint(endpoint) => Ok(endpoint.handle(req)),
            Self::Dispatcher(router) => router.dispatch(req),
        }
    }

    pub const fn is_dispatcher(&self) -> bool {
        matches!(self, Self::Dispatcher(_))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(_) => f.write_str("Endpoint"),
            Self::Dispatcher(router) => write!(f, "Dispatcher({} routes)", router.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_endpoint() {
        let handler = Handler::text("hello");
        let resp = handler.handle(&Request::get("/anything")).unwrap();
        assert_eq!(resp, Response::ok("hello"));
    }

    #[test]
    fn test_closure_endpoint_sees_request() {
        let handler = Handler::endpoint(|req: &Request| Response::ok(format!("{} {}", req.method, req.path)));
        let resp = handler.handle(&Request::new("POST", "/echo")).unwrap();
        assert_eq!(resp.body, "POST /echo");
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Handler::text("x")), "Endpoint");
        assert!(!Handler::text("x").is_dispatcher());
    }
}
