//! # Platform RBAC (Role-Based Access Control)
//!
//! This crate provides the fixed-role layer of the Relay platform's access
//! control: the identifiers feature areas use to describe permissions, and
//! the registry they declare their built-in roles against.
//!
//! ## Overview
//!
//! The platform-rbac crate handles:
//! - **Actions**: Namespaced operation identifiers (`plugins:write`)
//! - **Scopes**: Resource sets minted by a per-category `ScopeProvider`
//! - **Permissions**: Action + Scope pairs
//! - **Fixed Roles**: Code-declared roles and the built-in roles they are granted to
//! - **Registry**: Atomic, duplicate-rejecting batch declaration
//!
//! ## Architecture
//!
//! ```text
//! Permission   = Action + Scope
//! RoleDto      = name + display data + [Permission]
//! Registration = RoleDto + [BuiltinRole]
//!
//! Feature area ── declare_fixed_roles([Registration]) ──→ FixedRoleRegistry
//! ```
//!
//! Fixed role names carry the `fixedrole:` prefix and never change once
//! released, since the registry records grants against them.
//!
//! ## Usage
//!
//! ```rust
//! use platform_org::OrganizationRole;
//! use platform_rbac::{
//!     concat_permissions, fixed_role_name, Action, BuiltinRole, FixedRoleRegistry,
//!     MemoryRoleRegistry, Permission, RoleDto, RoleRegistration, ScopeProvider,
//! };
//!
//! static TEAMS: ScopeProvider = ScopeProvider::new("teams");
//! const ACTION_TEAMS_WRITE: Action = Action::from_static("teams:write");
//! const ACTION_TEAMS_DELETE: Action = Action::from_static("teams:delete");
//!
//! let writer = RoleRegistration {
//!     role: RoleDto {
//!         name: fixed_role_name("teams:writer"),
//!         display_name: "Team Writer".to_string(),
//!         description: "Update teams".to_string(),
//!         group: "Teams".to_string(),
//!         permissions: vec![Permission::new(ACTION_TEAMS_WRITE, TEAMS.resource_all_scope())],
//!     },
//!     grants: vec![OrganizationRole::Admin.into()],
//! };
//!
//! // Derived roles are composed from the base role's current permissions.
//! let admin = RoleRegistration {
//!     role: RoleDto {
//!         name: fixed_role_name("teams:admin"),
//!         display_name: "Team Admin".to_string(),
//!         description: "Update and delete teams".to_string(),
//!         group: "Teams".to_string(),
//!         permissions: concat_permissions(
//!             &writer.role.permissions,
//!             &[Permission::new(ACTION_TEAMS_DELETE, TEAMS.resource_all_scope())],
//!         ),
//!     },
//!     grants: vec![BuiltinRole::ServerAdmin],
//! };
//!
//! let registry = MemoryRoleRegistry::new();
//! registry.declare_fixed_roles(vec![writer, admin]).unwrap();
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! ## Integration with platform-org
//!
//! Grants target `platform-org` organization roles, or the global
//! super-admin via `BuiltinRole::ServerAdmin`.

pub mod actions;
pub mod config;
pub mod error;
pub mod permissions;
pub mod registry;
pub mod roles;
pub mod scopes;

// Re-export main types for convenience
pub use actions::Action;
pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{AccessControlError, AccessControlResult};
pub use permissions::{concat_permissions, Permission};
pub use registry::{FixedRoleRegistry, MemoryRoleRegistry};
pub use roles::{
    fixed_role_name, validate_fixed_role, BuiltinRole, RoleDto, RoleRegistration,
    FIXED_ROLE_PREFIX, SERVER_ADMIN,
};
pub use scopes::{Scope, ScopeProvider, SCOPE_ALL};
