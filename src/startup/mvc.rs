//! MVC application routes
//!
//! The application-level table a dispatcher forwards into. Paths here are
//! relative to wherever the dispatcher is mapped.

use crate::http::{Request, Response};
use crate::routing::{Handler, RouteError, RouteTable, Router};

pub const HELLO_SPRING_BODY: &str = "hello spring!";

fn hello_spring(_req: &Request) -> Response {
    Response::ok(HELLO_SPRING_BODY)
}

/// Build the MVC sub-router (`/hello-spring`)
pub fn hello_mvc_router() -> Result<Router, RouteError> {
    let mut table = RouteTable::new();
    table
        .add("helloController.hello", Handler::endpoint(hello_spring))?
        .add_mapping("/hello-spring")?;
    table.validate()?;
    Ok(Router::new(table))
}
