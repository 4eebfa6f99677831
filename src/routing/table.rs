//! Route table
//!
//! Ordered list of compiled routes. Registration order is the match order;
//! there is no specificity scoring.

use super::params::Params;
use super::pattern::RoutePattern;
use crate::error::AppError;

/// A compiled pattern with the parameters it was registered with
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub defaults: Params,
}

impl Route {
    /// Match a path, merging captures over the defaults (captures win)
    pub fn matches(&self, path: &str) -> Option<Params> {
        let captures = self.pattern.captures(path)?;
        let mut params = self.defaults.clone();
        params.extend(captures);
        Some(params)
    }
}

/// Append-only, ordered set of routes
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Compile `template` and append it with its default parameters
    pub fn add(&mut self, template: &str, defaults: Params) -> Result<(), AppError> {
        let pattern = RoutePattern::compile(template)?;
        self.routes.push(Route { pattern, defaults });
        Ok(())
    }

    /// First route (in registration order) matching `path`
    pub fn find(&self, path: &str) -> Option<(&Route, Params)> {
        self.routes
            .iter()
            .find_map(|route| route.matches(path).map(|params| (route, params)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = RouteTable::new();
        table
            .add("{controller}/{action}", params(&[("source", "generic")]))
            .unwrap();
        table
            .add(
                "posts/index",
                params(&[("controller", "Posts"), ("action", "index"), ("source", "literal")]),
            )
            .unwrap();

        let (route, matched) = table.find("posts/index").unwrap();
        assert_eq!(route.pattern.template(), "{controller}/{action}");
        assert_eq!(matched.get("source"), Some("generic"));
        assert_eq!(matched.get("controller"), Some("posts"));
    }

    #[test]
    fn test_captures_override_defaults() {
        let mut table = RouteTable::new();
        table
            .add(
                "posts/{id:\\d+}",
                params(&[("controller", "Posts"), ("action", "show"), ("id", "0")]),
            )
            .unwrap();

        let (_, matched) = table.find("posts/15").unwrap();
        assert_eq!(matched.get("id"), Some("15"));
        assert_eq!(matched.get("action"), Some("show"));
    }

    #[test]
    fn test_no_match() {
        let mut table = RouteTable::new();
        table.add("", params(&[("controller", "Home")])).unwrap();
        assert!(table.find("missing").is_none());
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_failed_add_leaves_table_untouched() {
        let mut table = RouteTable::new();
        assert!(table.add("{id:(}", Params::new()).is_err());
        assert!(table.is_empty());
    }
}
