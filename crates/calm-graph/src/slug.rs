//! Identifier derivation
//!
//! Turns display names into the lowercase, hyphenated identifiers used as
//! node ids. Every node kind appends its own suffix so that a database and a
//! data asset named after the same entity never collide.

/// Identifier used when there is no name at all
pub const UNKNOWN: &str = "unknown";

/// Derive a slug from a name
///
/// - `None` yields [`UNKNOWN`]; an empty name yields an empty slug.
/// - Every uppercase letter after the first output character starts a new
///   segment and is lowercased, so `OrderRepository` becomes
///   `order-repository` (and `HTTPClient` becomes `h-t-t-p-client`).
/// - Spaces, underscores and hyphens act as separators; they never lead and
///   never repeat.
///
/// ```
/// use calm_graph::slug::slug;
///
/// assert_eq!(slug("OrderRepository"), "order-repository");
/// assert_eq!(slug("Test Coverage"), "test-coverage");
/// assert_eq!(slug(None), "unknown");
/// assert_eq!(slug(""), "");
/// ```
#[must_use]
pub fn slug<'a>(name: impl Into<Option<&'a str>>) -> String {
    let Some(name) = name.into() else {
        return UNKNOWN.to_string();
    };

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            push_separator(&mut out);
            out.extend(c.to_lowercase());
        } else if matches!(c, ' ' | '_' | '-') {
            push_separator(&mut out);
        } else {
            out.push(c);
        }
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Node id of the database behind an entity
#[must_use]
pub fn database_id(entity_name: &str) -> String {
    format!("{}-db", slug(entity_name))
}

/// Node id of a data asset
#[must_use]
pub fn data_asset_id(simple_name: &str) -> String {
    format!("{}-data", slug(simple_name))
}

/// Node id of a messaging destination, tagged with its messaging system
#[must_use]
pub fn messaging_id(destination: &str, messaging_type: &str) -> String {
    format!("{}-{}", slug(destination), slug(messaging_type))
}
