//! Ownership resolution
//!
//! Maps a class name to the service node that owns it. Repositories, clients
//! and listeners rarely share a class with the controller that exposes the
//! service, so besides the exact match there is a package heuristic:
//!
//! 1. exact match on a registered service class;
//! 2. first registered service whose package is related to the class package
//!    (equal, or either one a string prefix of the other);
//! 3. first registered service whose *parent* package is related to the
//!    class's parent package, when both parents are non-empty. This is what
//!    links `com.example.order.repository` to `com.example.order.controller`.
//!
//! Step 2 is a plain string-prefix test and over-matches on purpose:
//! `com.ex` relates to `com.example`, and the empty package relates to
//! everything.

use indexmap::{IndexMap, IndexSet};

/// Package part of a qualified class name; empty when unqualified
#[must_use]
pub fn package_of(class_name: &str) -> &str {
    class_name.rsplit_once('.').map_or("", |(package, _)| package)
}

/// Whether two packages are considered the same neighbourhood
///
/// ```
/// use calm_graph::ownership::packages_related;
///
/// assert!(packages_related("com.example", "com.example.order"));
/// assert!(packages_related("com.ex", "com.example"));
/// assert!(!packages_related("com.example.order", "org.other"));
/// ```
#[inline]
#[must_use]
pub fn packages_related(a: &str, b: &str) -> bool {
    a == b || a.starts_with(b) || b.starts_with(a)
}

/// Registry of service classes, in registration order
#[derive(Debug, Clone, Default)]
pub struct OwnershipResolver {
    /// service class -> service node id
    services: IndexMap<String, String>,
}

impl OwnershipResolver {
    /// Create empty resolver
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the primary class of a service node
    ///
    /// Returns `false` if the class was already registered; the first
    /// registration is kept.
    pub fn register(&mut self, class_name: impl Into<String>, node_id: impl Into<String>) -> bool {
        match self.services.entry(class_name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(node_id.into());
                true
            }
        }
    }

    /// Resolve the owning service node of a class
    #[must_use]
    pub fn resolve(&self, class_name: &str) -> Option<&str> {
        self.resolve_exact(class_name)
            .or_else(|| self.resolve_by_package(class_name))
    }

    /// Resolve by exact class match only
    #[inline]
    #[must_use]
    pub fn resolve_exact(&self, class_name: &str) -> Option<&str> {
        self.services.get(class_name).map(String::as_str)
    }

    /// Resolve by the package heuristic only
    #[must_use]
    pub fn resolve_by_package(&self, class_name: &str) -> Option<&str> {
        let package = package_of(class_name);
        self.find(|service_package| packages_related(service_package, package))
            .or_else(|| {
                let parent = package_of(package);
                if parent.is_empty() {
                    return None;
                }
                self.find(|service_package| {
                    let service_parent = package_of(service_package);
                    !service_parent.is_empty() && packages_related(service_parent, parent)
                })
            })
    }

    fn find(&self, mut matches: impl FnMut(&str) -> bool) -> Option<&str> {
        self.services
            .iter()
            .find(|(class, _)| matches(package_of(class)))
            .map(|(_, node_id)| node_id.as_str())
    }

    /// Distinct service node ids, in registration order
    ///
    /// Classes whose names slug to the same id share one node, so an id is
    /// yielded once even when several classes map to it.
    pub fn service_ids(&self) -> impl Iterator<Item = &str> {
        self.services
            .values()
            .map(String::as_str)
            .collect::<IndexSet<_>>()
            .into_iter()
    }

    /// Number of registered service classes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no service is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
