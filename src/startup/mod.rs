//! Startup registrar
//!
//! Populates the route table once, before the server accepts traffic.
//! Any error here aborts startup.

mod declared;
mod init;
mod mvc;

pub use declared::{AnnotatedEndpoint, ANNOTATED_ENDPOINTS};
pub use init::{initializer_for, AppInit, DispatcherInit, MvcInit, ServletInit, HELLO_SERVLET_BODY};
pub use mvc::{hello_mvc_router, HELLO_SPRING_BODY};

use thiserror::Error;

use crate::config::StartupConfig;
use crate::logger;
use crate::routing::{RouteError, RouteTable, Router};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("unknown initializer '{0}'")]
    UnknownInitializer(String),

    #[error("route registration failed: {0}")]
    Route(#[from] RouteError),
}

/// Run the configured initializers and declared endpoints against `table`.
///
/// Callers invoke this exactly once per process. Initializer names are
/// checked before anything is registered.
pub fn initialize(table: &mut RouteTable, config: &StartupConfig) -> Result<(), StartupError> {
    let initializers = config
        .initializers
        .iter()
        .map(|name| {
            initializer_for(name).ok_or_else(|| StartupError::UnknownInitializer(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for init in &initializers {
        logger::log_initializer(init.name());
        init.on_startup(table)?;
    }

    if config.annotated {
        declared::register_annotated(table)?;
    }
    declared::register_configured(table, &config.endpoints)?;

    table.validate()?;

    for entry in table.entries() {
        logger::log_registration(entry);
    }
    Ok(())
}

/// Build the frozen top-level router from configuration
pub fn build_router(config: &StartupConfig) -> Result<Router, StartupError> {
    let mut table = RouteTable::new();
    initialize(&mut table, config)?;
    Ok(Router::new(table))
}
