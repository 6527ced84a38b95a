//! Declared endpoints
//!
//! Endpoints described as static data and registered by the startup
//! registrar, instead of being discovered at runtime.

use crate::config::DeclaredEndpoint;
use crate::routing::{Handler, RouteError, RouteTable};

/// Fixed-body endpoint bound to one or more patterns
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedEndpoint {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub body: &'static str,
}

/// Built-in declared endpoints
pub const ANNOTATED_ENDPOINTS: &[AnnotatedEndpoint] = &[AnnotatedEndpoint {
    name: "testServlet",
    patterns: &["/test"],
    body: "test",
}];

pub fn register_annotated(table: &mut RouteTable) -> Result<(), RouteError> {
    for endpoint in ANNOTATED_ENDPOINTS {
        register(table, endpoint.name, endpoint.patterns, endpoint.body)?;
    }
    Ok(())
}

/// Register endpoints declared in configuration
pub fn register_configured(
    table: &mut RouteTable,
    endpoints: &[DeclaredEndpoint],
) -> Result<(), RouteError> {
    for endpoint in endpoints {
        register(table, &endpoint.name, &endpoint.patterns, &endpoint.body)?;
    }
    Ok(())
}

fn register<P: AsRef<str>>(
    table: &mut RouteTable,
    name: &str,
    patterns: &[P],
    body: &str,
) -> Result<(), RouteError> {
    let mut registration = table.add(name, Handler::text(body))?;
    for pattern in patterns {
        registration.add_mapping(pattern.as_ref())?;
    }
    Ok(())
}
