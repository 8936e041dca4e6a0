/// Navigation seam between the router and its host
use crate::params::RouteParams;
use crate::path::Location;
use crate::route::RouteId;

/// How a navigation updates the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    pub const fn push() -> Self {
        Self { replace: false }
    }

    pub const fn replace() -> Self {
        Self { replace: true }
    }
}

/// Something that can move the application to a new path
pub trait Navigator {
    fn navigate(&mut self, path: &str, options: NavigateOptions);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        (**self).navigate(path, options)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        (**self).navigate(path, options)
    }
}

/// A navigation request as it was issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub options: NavigateOptions,
}

/// In-memory history stack
///
/// # Examples
///
/// ```
/// use locale_router::{HistoryNavigator, NavigateOptions, Navigator};
///
/// let mut history = HistoryNavigator::new("/settings");
/// history.navigate("/de/einstellungen", NavigateOptions::replace());
///
/// assert_eq!(history.current().pathname, "/de/einstellungen");
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryNavigator {
    entries: Vec<Location>,
    requests: Vec<NavigationRequest>,
}

impl HistoryNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            requests: Vec::new(),
        }
    }

    pub fn current(&self) -> &Location {
        // never empty: created with one entry and replace overwrites in place
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Every navigation issued so far, in order
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        let location = Location::parse(path);
        match self.entries.last_mut() {
            Some(last) if options.replace => *last = location,
            _ => self.entries.push(location),
        }
        self.requests.push(NavigationRequest {
            path: path.to_string(),
            options,
        });
    }
}

/// Target of a navigation link: a route to localize, or a raw href
#[derive(Debug, Clone, PartialEq)]
pub enum LinkTarget {
    Route {
        route_id: RouteId,
        params: Option<RouteParams>,
    },
    Href(String),
}

impl LinkTarget {
    pub fn route(route_id: impl Into<RouteId>) -> Self {
        LinkTarget::Route {
            route_id: route_id.into(),
            params: None,
        }
    }

    pub fn route_with(route_id: impl Into<RouteId>, params: RouteParams) -> Self {
        LinkTarget::Route {
            route_id: route_id.into(),
            params: Some(params),
        }
    }

    pub fn href(href: impl Into<String>) -> Self {
        LinkTarget::Href(href.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_replace() {
        let mut history = HistoryNavigator::new("/");
        history.navigate("/login", NavigateOptions::push());
        history.navigate("/settings?q=1", NavigateOptions::replace());

        let paths: Vec<String> = history.entries().iter().map(Location::href).collect();
        assert_eq!(paths, vec!["/".to_string(), "/settings?q=1".to_string()]);
        assert_eq!(history.requests().len(), 2);
        assert!(history.requests()[1].options.replace);
    }

    #[test]
    fn test_navigate_through_mut_ref() {
        fn go<N: Navigator>(mut navigator: N) {
            navigator.navigate("/analytics", NavigateOptions::push());
        }

        let mut history = HistoryNavigator::default();
        go(&mut history);
        assert_eq!(history.current().pathname, "/analytics");
    }
}
