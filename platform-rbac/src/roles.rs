//! # Fixed Roles
//!
//! Fixed roles are declared by code, not by administrators. Each one is
//! registered together with the built-in roles it is granted to.

use platform_org::OrganizationRole;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AccessControlError, AccessControlResult};
use crate::permissions::Permission;

/// Prefix carried by the name of every fixed role.
pub const FIXED_ROLE_PREFIX: &str = "fixedrole:";

/// Identifier of the global super-admin, which sits outside any organization.
pub const SERVER_ADMIN: &str = "Server Admin";

/// Build a fixed role name from its feature-area suffix.
///
/// ```
/// use platform_rbac::fixed_role_name;
///
/// assert_eq!(fixed_role_name("teams:reader"), "fixedrole:teams:reader");
/// ```
pub fn fixed_role_name(suffix: &str) -> String {
    format!("{FIXED_ROLE_PREFIX}{suffix}")
}

/// A role definition.
///
/// The `name` is the role's identity: the registry records grants against
/// it, so it must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    /// Unique role name, e.g. `fixedrole:plugins:writer`.
    pub name: String,
    /// Human-readable name shown in role pickers.
    pub display_name: String,
    /// What the role allows.
    pub description: String,
    /// Category label used to group roles in the UI.
    pub group: String,
    /// Permissions carried by the role. Order is preserved; duplicates are allowed.
    pub permissions: Vec<Permission>,
}

impl RoleDto {
    /// Check if the role name carries the fixed-role prefix.
    pub fn is_fixed(&self) -> bool {
        self.name.starts_with(FIXED_ROLE_PREFIX) && self.name.len() > FIXED_ROLE_PREFIX.len()
    }

    /// Check if every permission of `other` is also carried by this role.
    pub fn includes_permissions_of(&self, other: &RoleDto) -> bool {
        other
            .permissions
            .iter()
            .all(|perm| self.permissions.contains(perm))
    }
}

/// Check that a role may be registered as a fixed role.
///
/// # Errors
///
/// Returns [`AccessControlError::MissingFixedRolePrefix`] if the name does not
/// start with [`FIXED_ROLE_PREFIX`].
pub fn validate_fixed_role(role: &RoleDto) -> AccessControlResult<()> {
    if !role.is_fixed() {
        return Err(AccessControlError::MissingFixedRolePrefix {
            name: role.name.clone(),
            prefix: FIXED_ROLE_PREFIX,
        });
    }
    Ok(())
}

/// A built-in role a fixed role can be granted to.
///
/// Granting to an organization role gives the fixed role to every member
/// holding it. Granting to [`BuiltinRole::ServerAdmin`] gives it to the
/// global super-admin.
///
/// Serialized as its display string (`"Viewer"`, `"Admin"`, `"Server Admin"`).
///
/// # Example
///
/// ```
/// use platform_org::OrganizationRole;
/// use platform_rbac::BuiltinRole;
///
/// let viewer: BuiltinRole = "viewer".parse().unwrap();
/// assert_eq!(viewer, BuiltinRole::Org(OrganizationRole::Viewer));
/// assert_eq!(BuiltinRole::ServerAdmin.as_str(), "Server Admin");
/// assert!("owner".parse::<BuiltinRole>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuiltinRole {
    /// An organization role.
    Org(OrganizationRole),
    /// The global super-admin.
    ServerAdmin,
}

impl BuiltinRole {
    /// Get the identifier grants are recorded under.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinRole::Org(role) => role.display_name(),
            BuiltinRole::ServerAdmin => SERVER_ADMIN,
        }
    }

    /// Parse a built-in role identifier (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case(SERVER_ADMIN) {
            return Some(BuiltinRole::ServerAdmin);
        }
        OrganizationRole::parse(s).map(BuiltinRole::Org)
    }
}

impl From<OrganizationRole> for BuiltinRole {
    fn from(role: OrganizationRole) -> Self {
        BuiltinRole::Org(role)
    }
}

impl fmt::Display for BuiltinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinRole {
    type Err = AccessControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AccessControlError::InvalidBuiltinRole(s.to_string()))
    }
}

impl TryFrom<String> for BuiltinRole {
    type Error = AccessControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuiltinRole> for String {
    fn from(role: BuiltinRole) -> Self {
        role.as_str().to_string()
    }
}

/// A fixed role together with the built-in roles it is granted to.
///
/// This is the unit submitted to a [`FixedRoleRegistry`](crate::FixedRoleRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistration {
    /// The role being declared.
    pub role: RoleDto,
    /// Built-in roles that automatically receive the role.
    pub grants: Vec<BuiltinRole>,
}

impl RoleRegistration {
    /// Check if the role is granted to `builtin`.
    pub fn is_granted_to(&self, builtin: BuiltinRole) -> bool {
        self.grants.contains(&builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::scopes::ScopeProvider;

    static TEAMS: ScopeProvider = ScopeProvider::new("teams");

    fn role(name: &str, actions: &[&'static str]) -> RoleDto {
        RoleDto {
            name: name.to_string(),
            display_name: "Teams".to_string(),
            description: "Teams role".to_string(),
            group: "Teams".to_string(),
            permissions: actions
                .iter()
                .map(|a| Permission::new(Action::from_static(a), TEAMS.resource_all_scope()))
                .collect(),
        }
    }

    #[test]
    fn test_fixed_role_prefix() {
        assert!(role("fixedrole:teams:reader", &[]).is_fixed());
        assert!(!role("teams:reader", &[]).is_fixed());
        assert!(!role(FIXED_ROLE_PREFIX, &[]).is_fixed());
    }

    #[test]
    fn test_validate_fixed_role() {
        assert!(validate_fixed_role(&role("fixedrole:teams:reader", &[])).is_ok());
        assert_eq!(
            validate_fixed_role(&role("custom:teams:reader", &[])),
            Err(AccessControlError::MissingFixedRolePrefix {
                name: "custom:teams:reader".to_string(),
                prefix: FIXED_ROLE_PREFIX,
            })
        );
    }

    #[test]
    fn test_includes_permissions_of() {
        let writer = role("fixedrole:teams:writer", &["teams:write"]);
        let admin = role("fixedrole:teams:admin", &["teams:write", "teams:delete"]);

        assert!(admin.includes_permissions_of(&writer));
        assert!(!writer.includes_permissions_of(&admin));
    }

    #[test]
    fn test_builtin_role_parse() {
        assert_eq!(
            BuiltinRole::parse("Viewer"),
            Some(BuiltinRole::Org(OrganizationRole::Viewer))
        );
        assert_eq!(BuiltinRole::parse("server admin"), Some(BuiltinRole::ServerAdmin));
        assert_eq!(BuiltinRole::parse("root"), None);
        assert_eq!(
            "root".parse::<BuiltinRole>(),
            Err(AccessControlError::InvalidBuiltinRole("root".to_string()))
        );
    }

    #[test]
    fn test_builtin_role_as_str() {
        assert_eq!(BuiltinRole::from(OrganizationRole::Admin).as_str(), "Admin");
        assert_eq!(BuiltinRole::ServerAdmin.to_string(), SERVER_ADMIN);
    }

    #[test]
    fn test_registration_serde() {
        let registration = RoleRegistration {
            role: role("fixedrole:teams:reader", &["teams:read"]),
            grants: vec![BuiltinRole::ServerAdmin, OrganizationRole::Viewer.into()],
        };

        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["grants"], serde_json::json!(["Server Admin", "Viewer"]));
        assert_eq!(json["role"]["permissions"][0]["scope"], "teams:*");

        let parsed: RoleRegistration = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, registration);
        assert!(parsed.is_granted_to(BuiltinRole::ServerAdmin));
        assert!(!parsed.is_granted_to(BuiltinRole::Org(OrganizationRole::Admin)));
    }

    #[test]
    fn test_builtin_role_serializes_like_org_role() {
        for role in OrganizationRole::all() {
            assert_eq!(
                serde_json::to_value(BuiltinRole::from(role)).unwrap(),
                serde_json::to_value(role).unwrap()
            );
        }
    }
}
