//! # Scopes
//!
//! Scopes identify the resources a permission applies to.
//!
//! Scopes are minted by a [`ScopeProvider`] owned by a resource category, so
//! every feature area builds them the same way:
//!
//! ```text
//! plugins:*               - every plugin
//! plugins:id:*            - every plugin, addressed by id
//! plugins:id:42           - one plugin by id
//! plugins:uid:grafana-app - one plugin by uid
//! plugins:name:my-plugin  - one plugin by name
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccessControlError, AccessControlResult};

/// The scope matching every resource of every kind.
pub const SCOPE_ALL: &str = "*";

/// A resource scope.
///
/// A `*` wildcard is only allowed as the final character, and `?` is never
/// allowed.
///
/// # Example
///
/// ```
/// use platform_rbac::Scope;
///
/// let scope = Scope::new("teams:id:7").unwrap();
/// assert_eq!(scope.kind(), "teams");
/// assert!(!scope.is_wildcard());
///
/// assert!(Scope::new("teams:*").unwrap().is_wildcard());
/// assert!(Scope::new("teams:*:7").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope(String);

impl Scope {
    /// Create a scope, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`AccessControlError::InvalidScope`] for empty scopes, scopes
    /// containing whitespace or `?`, and scopes with a `*` anywhere but the
    /// end.
    pub fn new(scope: impl Into<String>) -> AccessControlResult<Self> {
        let scope = scope.into();
        if !is_valid_scope(&scope) {
            return Err(AccessControlError::InvalidScope(scope));
        }
        Ok(Self(scope))
    }

    /// Get the string representation of the scope.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The resource kind (the part before the first `:`).
    pub fn kind(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(kind, _)| kind)
    }

    /// Check if the scope ends with a `*` wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with('*')
    }
}

fn is_valid_scope(scope: &str) -> bool {
    if scope.is_empty() || scope.chars().any(char::is_whitespace) {
        return false;
    }
    let body = scope.strip_suffix('*').unwrap_or(scope);
    !body.contains(|c: char| c == '*' || c == '?')
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Scope {
    type Error = AccessControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.0
    }
}

/// Mints scopes for one resource category.
///
/// The root may only contain `[a-z0-9._-]`. Since it can hold neither `:`
/// nor `*`, scopes minted by providers with different roots never collide.
///
/// # Example
///
/// ```
/// use platform_rbac::ScopeProvider;
///
/// static TEAMS: ScopeProvider = ScopeProvider::new("teams");
///
/// assert_eq!(TEAMS.resource_all_scope().as_str(), "teams:*");
/// assert_eq!(TEAMS.resource_scope("7").unwrap().as_str(), "teams:id:7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeProvider {
    root: &'static str,
}

impl ScopeProvider {
    /// Create a provider for a resource category.
    ///
    /// # Panics
    ///
    /// Panics if `root` is empty or contains characters outside
    /// `[a-z0-9._-]`. In a `static` or `const` this is a compile error.
    pub const fn new(root: &'static str) -> Self {
        assert!(is_valid_root(root), "scope root must match [a-z0-9._-]+");
        Self { root }
    }

    /// Create a provider, reporting an invalid root as an error.
    pub fn try_new(root: &'static str) -> AccessControlResult<Self> {
        if !is_valid_root(root) {
            return Err(AccessControlError::InvalidScopeRoot(root.to_string()));
        }
        Ok(Self { root })
    }

    /// The resource category this provider mints scopes for.
    pub fn root(&self) -> &'static str {
        self.root
    }

    /// Scope for a single resource by id, e.g. `plugins:id:42`.
    pub fn resource_scope(&self, id: &str) -> AccessControlResult<Scope> {
        self.attribute_scope("id", id)
    }

    /// Scope for a single resource by uid, e.g. `plugins:uid:grafana-app`.
    pub fn resource_scope_uid(&self, uid: &str) -> AccessControlResult<Scope> {
        self.attribute_scope("uid", uid)
    }

    /// Scope for a single resource by name, e.g. `plugins:name:my-plugin`.
    pub fn resource_scope_name(&self, name: &str) -> AccessControlResult<Scope> {
        self.attribute_scope("name", name)
    }

    /// Scope matching every resource in this category, e.g. `plugins:*`.
    pub fn resource_all_scope(&self) -> Scope {
        Scope(format!("{}:*", self.root))
    }

    /// Scope matching every resource in this category by id, e.g. `plugins:id:*`.
    pub fn resource_all_id_scope(&self) -> Scope {
        Scope(format!("{}:id:*", self.root))
    }

    /// Check if a scope was minted under this provider's root.
    pub fn owns(&self, scope: &Scope) -> bool {
        scope.kind() == self.root && scope.as_str().len() > self.root.len()
    }

    /// Single-resource scopes never carry a wildcard or another segment.
    fn attribute_scope(&self, attribute: &str, value: &str) -> AccessControlResult<Scope> {
        let scope = format!("{}:{}:{}", self.root, attribute, value);
        if value.is_empty() || value.contains(|c: char| c == ':' || c == '*' || c == '?') {
            return Err(AccessControlError::InvalidScope(scope));
        }
        Scope::new(scope)
    }
}

const fn is_valid_root(root: &str) -> bool {
    let bytes = root.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'_' || b == b'-') {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEAMS: ScopeProvider = ScopeProvider::new("teams");
    static TEAMS_APP: ScopeProvider = ScopeProvider::new("teams.app");

    #[test]
    fn test_scope_validation() {
        assert!(Scope::new("teams:*").is_ok());
        assert!(Scope::new("teams:id:*").is_ok());
        assert!(Scope::new("teams:id:7").is_ok());
        assert!(Scope::new(SCOPE_ALL).is_ok());

        assert!(Scope::new("").is_err());
        assert!(Scope::new("teams:*:7").is_err());
        assert!(Scope::new("teams:**").is_err());
        assert!(Scope::new("teams:id:?").is_err());
        assert!(Scope::new("teams: id").is_err());
    }

    #[test]
    fn test_scope_kind() {
        assert_eq!(Scope::new("teams:id:7").unwrap().kind(), "teams");
        assert_eq!(Scope::new(SCOPE_ALL).unwrap().kind(), "*");
    }

    #[test]
    fn test_provider_scopes() {
        assert_eq!(TEAMS.root(), "teams");
        assert_eq!(TEAMS.resource_all_scope().as_str(), "teams:*");
        assert_eq!(TEAMS.resource_all_id_scope().as_str(), "teams:id:*");
        assert_eq!(TEAMS.resource_scope("7").unwrap().as_str(), "teams:id:7");
        assert_eq!(TEAMS.resource_scope_uid("abc").unwrap().as_str(), "teams:uid:abc");
        assert_eq!(TEAMS.resource_scope_name("ops").unwrap().as_str(), "teams:name:ops");
    }

    #[test]
    fn test_provider_rejects_wildcard_ids() {
        assert_eq!(
            TEAMS.resource_scope("*"),
            Err(AccessControlError::InvalidScope("teams:id:*".to_string()))
        );
        assert!(TEAMS.resource_scope("7*").is_err());
        assert!(TEAMS.resource_scope("*7").is_err());
        assert!(TEAMS.resource_scope_uid("a?").is_err());
        assert!(TEAMS.resource_scope_name("a b").is_err());
    }

    #[test]
    fn test_provider_rejects_empty_values() {
        assert_eq!(
            TEAMS.resource_scope(""),
            Err(AccessControlError::InvalidScope("teams:id:".to_string()))
        );
        assert!(TEAMS.resource_scope_uid("").is_err());
        assert!(TEAMS.resource_scope_name("").is_err());
    }

    #[test]
    fn test_provider_rejects_extra_segments() {
        assert_eq!(
            TEAMS.resource_scope_name("x:*"),
            Err(AccessControlError::InvalidScope("teams:name:x:*".to_string()))
        );
        assert!(TEAMS.resource_scope("7:8").is_err());
        assert!(TEAMS.resource_scope_uid("id:7").is_err());
    }

    #[test]
    fn test_providers_do_not_collide() {
        assert_ne!(TEAMS.resource_all_scope(), TEAMS_APP.resource_all_scope());
        assert!(TEAMS.owns(&TEAMS.resource_all_scope()));
        assert!(!TEAMS.owns(&TEAMS_APP.resource_all_scope()));
        assert!(!TEAMS_APP.owns(&TEAMS.resource_scope("7").unwrap()));
    }

    #[test]
    fn test_try_new() {
        assert!(ScopeProvider::try_new("dashboards").is_ok());
        assert_eq!(
            ScopeProvider::try_new("dash:boards"),
            Err(AccessControlError::InvalidScopeRoot("dash:boards".to_string()))
        );
        assert!(ScopeProvider::try_new("").is_err());
        assert!(ScopeProvider::try_new("Teams").is_err());
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&TEAMS.resource_all_scope()).unwrap();
        assert_eq!(json, "\"teams:*\"");
        assert!(serde_json::from_str::<Scope>("\"teams:*:7\"").is_err());
    }
}
