//! Routing module
//!
//! Container-style URL pattern routing:
//! - Exact, prefix-wildcard and catch-all patterns
//! - Longest-prefix resolution with an ambiguity check
//! - Nested routers that receive the path below their mapping

mod endpoint;
mod error;
mod pattern;
mod router;
mod table;

pub use endpoint::{Endpoint, Handler, TextEndpoint};
pub use error::RouteError;
pub use pattern::RoutePattern;
pub use router::{MatchKind, Resolution, Router};
pub use table::{Registration, RouteEntry, RouteTable};
