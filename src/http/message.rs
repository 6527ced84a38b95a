//! Request/response value objects
//!
//! The only fields a handler sees. The hyper layer in `handler` converts
//! to and from these at the request boundary.

/// Inbound request as seen by route handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Shorthand for a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    /// Same request re-targeted at `path` (used when forwarding to a sub-router)
    #[must_use]
    pub fn forwarded(&self, path: &str) -> Self {
        Self {
            method: self.method.clone(),
            path: path.to_string(),
        }
    }
}

/// Handler output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 OK with a text body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_keeps_method() {
        let req = Request::new("POST", "/spring/hello-spring");
        let fwd = req.forwarded("/hello-spring");
        assert_eq!(fwd.method, "POST");
        assert_eq!(fwd.path, "/hello-spring");
    }

    #[test]
    fn test_response_ok() {
        let resp = Response::ok("hello");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "hello");
    }
}
