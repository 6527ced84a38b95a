//! HTTP layer module
//!
//! Request/response value objects handed to route handlers, and the hyper
//! response builders used at the request boundary.

pub mod message;
pub mod response;

// Re-export commonly used types
pub use message::{Request, Response};
pub use response::{build_404_response, build_500_response, build_text_response};
