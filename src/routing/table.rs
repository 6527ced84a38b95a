//! Route table module
//!
//! Collects (pattern, handler) bindings during startup. Ordering among
//! overlapping patterns is decided at lookup time by specificity, so
//! insertion order carries no meaning here.

use std::collections::{HashMap, HashSet};

use super::endpoint::Handler;
use super::error::RouteError;
use super::pattern::RoutePattern;

/// One binding of a pattern to a handler
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Registration name, used in logs and error messages
    pub name: String,
    pub pattern: RoutePattern,
    pub handler: Handler,
}

#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    /// Names taken by [`RouteTable::add`] and [`RouteTable::register`]
    names: HashSet<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `pattern`; the binding is named after the pattern.
    ///
    /// Fails without modifying the table if the pattern is malformed, if a
    /// literal pattern (exact path or `/`) is already bound, or if the name
    /// is already taken.
    pub fn register(&mut self, pattern: &str, handler: Handler) -> Result<(), RouteError> {
        let parsed = RoutePattern::parse(pattern)?;
        self.check_literal(&parsed)?;
        if !self.names.insert(pattern.to_string()) {
            return Err(RouteError::DuplicateName(pattern.to_string()));
        }
        self.entries.push(RouteEntry {
            name: pattern.to_string(),
            pattern: parsed,
            handler,
        });
        Ok(())
    }

    /// Add a named handler; bind it with [`Registration::add_mapping`].
    pub fn add(&mut self, name: &str, handler: Handler) -> Result<Registration<'_>, RouteError> {
        if !self.names.insert(name.to_string()) {
            return Err(RouteError::DuplicateName(name.to_string()));
        }
        Ok(Registration {
            table: self,
            name: name.to_string(),
            handler,
        })
    }

    /// Check for prefix patterns that can never be told apart at lookup time,
    /// here and in every nested router
    pub fn validate(&self) -> Result<(), RouteError> {
        validate_entries(&self.entries)
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

    pub(super) fn into_entries(self) -> Vec<RouteEntry> {
        self.entries
    }

    fn check_literal(&self, pattern: &RoutePattern) -> Result<(), RouteError> {
        if pattern.is_literal() {
            if let Some(existing) = self.entries.iter().find(|e| e.pattern == *pattern) {
                return Err(RouteError::DuplicateExactPattern {
                    pattern: pattern.to_string(),
                    existing: existing.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn insert(
        &mut self,
        name: String,
        pattern: RoutePattern,
        handler: Handler,
    ) -> Result<(), RouteError> {
        self.check_literal(&pattern)?;
        self.entries.push(RouteEntry {
            name,
            pattern,
            handler,
        });
        Ok(())
    }
}

fn validate_entries(entries: &[RouteEntry]) -> Result<(), RouteError> {
    let mut seen: HashMap<&str, &RouteEntry> = HashMap::new();
    for entry in entries {
        if let Handler::Dispatcher(router) = &entry.handler {
            validate_entries(router.entries())?;
        }
        let RoutePattern::Prefix(prefix) = &entry.pattern else {
            continue;
        };
        if let Some(first) = seen.insert(prefix.as_str(), entry) {
            return Err(RouteError::AmbiguousRoute {
                pattern: entry.pattern.to_string(),
                first: first.name.clone(),
                second: entry.name.clone(),
            });
        }
    }
    Ok(())
}

/// Handle to a named handler, returned by [`RouteTable::add`]
#[derive(Debug)]
pub struct Registration<'a> {
    table: &'a mut RouteTable,
    name: String,
    handler: Handler,
}

impl Registration<'_> {
    /// Bind this handler to one more pattern
    pub fn add_mapping(&mut self, pattern: &str) -> Result<&mut Self, RouteError> {
        let parsed = RoutePattern::parse(pattern)?;
        self.table
            .insert(self.name.clone(), parsed, self.handler.clone())?;
        Ok(self)
    }
}
