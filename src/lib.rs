//! Servlet-style request routing: a container-level router that binds URL
//! patterns to endpoints or to nested MVC dispatchers, populated once by a
//! startup registrar and served over hyper.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod startup;
