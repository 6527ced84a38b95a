//! Router module
//!
//! Resolves a request path against a frozen route table.
//!
//! Matching priority:
//! 1. Exact literal match
//! 2. Longest prefix match (equal-length prefixes are ambiguous)
//! 3. Root catch-all (`/`)

use std::collections::HashMap;

use super::endpoint::Handler;
use super::error::RouteError;
use super::pattern::RoutePattern;
use super::table::{RouteEntry, RouteTable};
use crate::http::{Request, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
    CatchAll,
}

/// Outcome of a successful lookup
#[derive(Debug)]
pub struct Resolution<'r, 'p> {
    pub entry: &'r RouteEntry,
    pub kind: MatchKind,
    /// Path below the matched prefix; only set for prefix matches
    pub remainder: Option<&'p str>,
    path: &'p str,
}

impl Resolution<'_, '_> {
    fn handler(&self) -> &Handler {
        &self.entry.handler
    }

    /// Run the matched handler for `req`; nested routers get [`Self::forward_path`]
    pub fn handle(&self, req: &Request) -> Result<Response, RouteError> {
        match self.handler() {
            Handler::Dispatcher(_) => self.handler().handle(&req.forwarded(self.forward_path())),
            Handler::Endpoint(_) => self.handler().handle(req),
        }
    }

    /// Path handed to a nested router.
    ///
    /// Prefix matches strip the prefix (an empty remainder becomes `/`);
    /// exact and catch-all matches forward the full path.
    pub fn forward_path(&self) -> &str {
        match self.remainder {
            Some("") => "/",
            Some(rest) => rest,
            None => self.path,
        }
    }
}

/// Immutable route lookup structure, shared across request tasks
#[derive(Debug)]
pub struct Router {
    entries: Vec<RouteEntry>,
    exact: HashMap<String, usize>,
    prefixes: Vec<usize>,
    catch_all: Option<usize>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        let entries = table.into_entries();
        let mut exact = HashMap::new();
        let mut prefixes = Vec::new();
        let mut catch_all = None;

        for (idx, entry) in entries.iter().enumerate() {
            match &entry.pattern {
                RoutePattern::Exact(path) => {
                    exact.insert(path.clone(), idx);
                }
                RoutePattern::Prefix(_) => prefixes.push(idx),
                RoutePattern::CatchAll => catch_all = Some(idx),
            }
        }

        // Most specific first
        prefixes.sort_by_key(|&idx| std::cmp::Reverse(entries[idx].pattern.specificity()));

        Self {
            entries,
            exact,
            prefixes,
            catch_all,
        }
    }

    pub fn resolve<'p>(&self, path: &'p str) -> Result<Resolution<'_, 'p>, RouteError> {
        if let Some(&idx) = self.exact.get(path) {
            return Ok(Resolution {
                entry: &self.entries[idx],
                kind: MatchKind::Exact,
                remainder: None,
                path,
            });
        }

        let mut candidates = self.prefixes.iter().filter_map(|&idx| {
            let entry = &self.entries[idx];
            entry.pattern.strip_prefix(path).map(|rest| (entry, rest))
        });
        if let Some((entry, rest)) = candidates.next() {
            // Sorted by specificity, so a tie can only be the next candidate
            if let Some((other, _)) = candidates.next() {
                if other.pattern.specificity() == entry.pattern.specificity() {
                    return Err(RouteError::AmbiguousRoute {
                        pattern: entry.pattern.to_string(),
                        first: entry.name.clone(),
                        second: other.name.clone(),
                    });
                }
            }
            return Ok(Resolution {
                entry,
                kind: MatchKind::Prefix,
                remainder: Some(rest),
                path,
            });
        }

        self.catch_all
            .map(|idx| Resolution {
                entry: &self.entries[idx],
                kind: MatchKind::CatchAll,
                remainder: None,
                path,
            })
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Resolve `req` and run the selected handler, descending into nested routers
    pub fn dispatch(&self, req: &Request) -> Result<Response, RouteError> {
        self.resolve(&req.path)?.handle(req)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(routes: &[(&str, &str)]) -> Router {
        let mut table = RouteTable::new();
        for (pattern, body) in routes {
            table.register(pattern, Handler::text(*body)).unwrap();
        }
        Router::new(table)
    }

    fn body(router: &Router, path: &str) -> Result<String, RouteError> {
        router.dispatch(&Request::get(path)).map(|r| r.body)
    }

    #[test]
    fn test_exact_match() {
        let r = router(&[("/hello-servlet", "hello"), ("/test", "test")]);
        let res = r.resolve("/hello-servlet").unwrap();
        assert_eq!(res.kind, MatchKind::Exact);
        assert_eq!(res.entry.name, "/hello-servlet");
        assert_eq!(body(&r, "/test").unwrap(), "test");
    }

    #[test]
    fn test_exact_beats_prefix() {
        let r = router(&[("/spring/*", "prefix"), ("/spring/hello", "exact")]);
        assert_eq!(body(&r, "/spring/hello").unwrap(), "exact");
        assert_eq!(body(&r, "/spring/other").unwrap(), "prefix");
    }

    #[test]
    fn test_prefix_match_and_remainder() {
        let r = router(&[("/spring/*", "spring")]);
        let res = r.resolve("/spring/hello-spring").unwrap();
        assert_eq!(res.kind, MatchKind::Prefix);
        assert_eq!(res.remainder, Some("/hello-spring"));
        assert_eq!(res.forward_path(), "/hello-spring");
    }

    #[test]
    fn test_prefix_matches_bare_prefix() {
        let r = router(&[("/spring/*", "spring")]);
        let res = r.resolve("/spring").unwrap();
        assert_eq!(res.remainder, Some(""));
        assert_eq!(res.forward_path(), "/");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let r = router(&[("/spring/*", "spring"), ("/spring/admin/*", "admin")]);
        assert_eq!(body(&r, "/spring/admin/x").unwrap(), "admin");
        assert_eq!(body(&r, "/spring/x").unwrap(), "spring");
    }

    #[test]
    fn test_longest_prefix_independent_of_insertion_order() {
        let r = router(&[("/spring/admin/*", "admin"), ("/*", "all"), ("/spring/*", "spring")]);
        assert_eq!(body(&r, "/spring/admin/x").unwrap(), "admin");
        assert_eq!(body(&r, "/spring/x").unwrap(), "spring");
        assert_eq!(body(&r, "/other").unwrap(), "all");
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        let r = router(&[("/spring/*", "spring"), ("/", "root")]);
        assert_eq!(body(&r, "/springfield").unwrap(), "root");
    }

    #[test]
    fn test_catch_all() {
        let r = router(&[("/hello-servlet", "hello"), ("/", "root")]);
        let res = r.resolve("/unknown/path").unwrap();
        assert_eq!(res.kind, MatchKind::CatchAll);
        assert_eq!(res.forward_path(), "/unknown/path");
        assert_eq!(body(&r, "/").unwrap(), "root");
    }

    #[test]
    fn test_not_found_without_catch_all() {
        let r = router(&[("/hello-servlet", "hello")]);
        assert_eq!(
            body(&r, "/missing").unwrap_err(),
            RouteError::NotFound("/missing".to_string())
        );
    }

    #[test]
    fn test_equal_prefixes_are_ambiguous() {
        let mut table = RouteTable::new();
        table.add("a", Handler::text("a")).unwrap().add_mapping("/spring/*").unwrap();
        table.add("b", Handler::text("b")).unwrap().add_mapping("/spring/*").unwrap();
        let r = Router::new(table);

        assert!(matches!(
            r.resolve("/spring/x"),
            Err(RouteError::AmbiguousRoute { .. })
        ));
        // Unrelated paths still resolve
        assert!(matches!(r.resolve("/other"), Err(RouteError::NotFound(_))));
    }

    #[test]
    fn test_sub_router_strips_prefix() {
        let mut inner = RouteTable::new();
        inner
            .register(
                "/hello-spring",
                Handler::endpoint(|req: &Request| Response::ok(format!("inner saw {}", req.path))),
            )
            .unwrap();

        let mut outer = RouteTable::new();
        outer.register("/hello-servlet", Handler::text("hello")).unwrap();
        outer
            .register("/spring/*", Handler::dispatcher(Router::new(inner)))
            .unwrap();
        let r = Router::new(outer);

        assert_eq!(body(&r, "/hello-servlet").unwrap(), "hello");
        assert_eq!(
            body(&r, "/spring/hello-spring").unwrap(),
            "inner saw /hello-spring"
        );
        assert_eq!(
            body(&r, "/spring/missing").unwrap_err(),
            RouteError::NotFound("/missing".to_string())
        );
    }

    #[test]
    fn test_catch_all_sub_router_sees_full_path() {
        let mut inner = RouteTable::new();
        inner.register("/hello-spring", Handler::text("hello spring")).unwrap();

        let mut outer = RouteTable::new();
        outer.register("/", Handler::dispatcher(Router::new(inner))).unwrap();
        let r = Router::new(outer);

        assert_eq!(body(&r, "/hello-spring").unwrap(), "hello spring");
    }

    #[test]
    fn test_two_level_nesting() {
        let mut leaf = RouteTable::new();
        leaf.register("/x", Handler::text("leaf")).unwrap();
        let mut mid = RouteTable::new();
        mid.register("/b/*", Handler::dispatcher(Router::new(leaf))).unwrap();
        let mut top = RouteTable::new();
        top.register("/a/*", Handler::dispatcher(Router::new(mid))).unwrap();
        let r = Router::new(top);

        assert_eq!(body(&r, "/a/b/x").unwrap(), "leaf");
    }

    #[test]
    fn test_router_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}
