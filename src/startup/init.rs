//! Startup initializers
//!
//! Each initializer shows one registration style and is run once by the
//! registrar before any request is served.

use super::mvc::hello_mvc_router;
use crate::routing::{Handler, RouteError, RouteTable};

pub const HELLO_SERVLET_BODY: &str = "hello servlet!";

/// One-time route registration hook
pub trait AppInit: Send + Sync {
    /// Name used in startup logs and configuration
    fn name(&self) -> &'static str;

    fn on_startup(&self, table: &mut RouteTable) -> Result<(), RouteError>;
}

/// Registers a plain endpoint directly
#[derive(Debug, Default)]
pub struct ServletInit;

impl AppInit for ServletInit {
    fn name(&self) -> &'static str {
        "servlet"
    }

    fn on_startup(&self, table: &mut RouteTable) -> Result<(), RouteError> {
        table
            .add("helloServlet", Handler::text(HELLO_SERVLET_BODY))?
            .add_mapping("/hello-servlet")?;
        Ok(())
    }
}

/// Registers the MVC dispatcher under `/spring/*`
#[derive(Debug, Default)]
pub struct DispatcherInit;

impl AppInit for DispatcherInit {
    fn name(&self) -> &'static str {
        "spring"
    }

    fn on_startup(&self, table: &mut RouteTable) -> Result<(), RouteError> {
        let dispatcher = Handler::dispatcher(hello_mvc_router()?);
        table.add("dispatcherV2", dispatcher)?.add_mapping("/spring/*")?;
        Ok(())
    }
}

/// Registers the MVC dispatcher as the catch-all
#[derive(Debug, Default)]
pub struct MvcInit;

impl AppInit for MvcInit {
    fn name(&self) -> &'static str {
        "spring_mvc"
    }

    fn on_startup(&self, table: &mut RouteTable) -> Result<(), RouteError> {
        let dispatcher = Handler::dispatcher(hello_mvc_router()?);
        table.add("dispatcherV3", dispatcher)?.add_mapping("/")?;
        Ok(())
    }
}

/// Look up a built-in initializer by its configured name
pub fn initializer_for(name: &str) -> Option<Box<dyn AppInit>> {
    match name {
        "servlet" => Some(Box::new(ServletInit)),
        "spring" => Some(Box::new(DispatcherInit)),
        "spring_mvc" => Some(Box::new(MvcInit)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Request;
    use crate::routing::Router;

    fn run(init: &dyn AppInit) -> Router {
        let mut table = RouteTable::new();
        init.on_startup(&mut table).unwrap();
        Router::new(table)
    }

    #[test]
    fn test_servlet_init() {
        let router = run(&ServletInit);
        let resp = router.dispatch(&Request::get("/hello-servlet")).unwrap();
        assert_eq!(resp.body, HELLO_SERVLET_BODY);
        assert!(router.dispatch(&Request::get("/spring/hello-spring")).is_err());
    }

    #[test]
    fn test_dispatcher_init_strips_prefix() {
        let router = run(&DispatcherInit);
        let resp = router.dispatch(&Request::get("/spring/hello-spring")).unwrap();
        assert_eq!(resp.body, "hello spring!");
        assert!(router.dispatch(&Request::get("/hello-spring")).is_err());
    }

    #[test]
    fn test_mvc_init_catches_everything() {
        let router = run(&MvcInit);
        let resp = router.dispatch(&Request::get("/hello-spring")).unwrap();
        assert_eq!(resp.body, "hello spring!");
        assert_eq!(router.entries()[0].name, "dispatcherV3");
    }

    #[test]
    fn test_initializer_lookup() {
        assert_eq!(initializer_for("servlet").unwrap().name(), "servlet");
        assert_eq!(initializer_for("spring").unwrap().name(), "spring");
        assert_eq!(initializer_for("spring_mvc").unwrap().name(), "spring_mvc");
        assert!(initializer_for("struts").is_none());
    }

    #[test]
    fn test_running_twice_conflicts() {
        let mut table = RouteTable::new();
        ServletInit.on_startup(&mut table).unwrap();
        assert!(ServletInit.on_startup(&mut table).is_err());
    }
}
