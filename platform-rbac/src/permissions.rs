//! # Permissions
//!
//! A permission pairs an action with the scope it applies to.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::scopes::Scope;

/// An `(action, scope)` pair authorizing one operation on a resource set.
///
/// # Example
///
/// ```
/// use platform_rbac::{Action, Permission, ScopeProvider};
///
/// static TEAMS: ScopeProvider = ScopeProvider::new("teams");
///
/// let perm = Permission::new(Action::from_static("teams:read"), TEAMS.resource_all_scope());
/// assert_eq!(perm.action.as_str(), "teams:read");
/// assert_eq!(perm.scope.as_str(), "teams:*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// The action allowed.
    pub action: Action,
    /// The resources the action is allowed on.
    pub scope: Scope,
}

impl Permission {
    /// Create a new permission.
    pub fn new(action: Action, scope: Scope) -> Self {
        Self { action, scope }
    }
}

/// Build a new permission list from `base` followed by `extra`.
///
/// Neither input is modified. Roles derived from another role call this at
/// construction time with the other role's current permissions, so the
/// derived role always carries whatever the base role declares.
///
/// Duplicates are kept in order.
///
/// # Example
///
/// ```
/// use platform_rbac::{concat_permissions, Action, Permission, ScopeProvider};
///
/// static TEAMS: ScopeProvider = ScopeProvider::new("teams");
///
/// let write = vec![Permission::new(Action::from_static("teams:write"), TEAMS.resource_all_scope())];
/// let delete = [Permission::new(Action::from_static("teams:delete"), TEAMS.resource_all_scope())];
///
/// let combined = concat_permissions(&write, &delete);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(write.len(), 1);
/// ```
pub fn concat_permissions(base: &[Permission], extra: &[Permission]) -> Vec<Permission> {
    let mut combined = Vec::with_capacity(base.len() + extra.len());
    combined.extend_from_slice(base);
    combined.extend_from_slice(extra);
    combined
}
