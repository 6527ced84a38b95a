//! Request handler module
//!
//! The request boundary between the HTTP server and the router.

pub mod dispatch;

// Re-export main entry point
pub use dispatch::handle_request;
