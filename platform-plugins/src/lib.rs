//! # Platform Plugins
//!
//! Fixed RBAC roles of the plugin manager.
//!
//! The host calls [`declare_rbac_roles`] once during startup with its
//! access-control registry. A failure means the role set is incomplete and
//! the host must not start serving authorization decisions.
//!
//! ```rust
//! use platform_plugins::{declare_rbac_roles, ROLE_INSTALLER};
//! use platform_rbac::{BuiltinRole, MemoryRoleRegistry};
//!
//! let registry = MemoryRoleRegistry::new();
//! declare_rbac_roles(&registry).expect("plugin roles must be declared before serving");
//!
//! assert_eq!(registry.roles_granted_to(BuiltinRole::ServerAdmin).len(), 2);
//! assert!(registry.role(ROLE_INSTALLER).is_some());
//! ```
//!
//! Production hosts build the registry with
//! `MemoryRoleRegistry::with_config(RegistryConfig::from_env())`.

pub mod accesscontrol;

// Re-export main items for convenience
pub use accesscontrol::{
    app_reader_registration, declare_rbac_roles, fixed_role_registrations,
    installer_registration, writer_registration, ACTION_APP_ACCESS, ACTION_PLUGINS_INSTALL,
    ACTION_PLUGINS_WRITE, ROLE_APP_READER, ROLE_INSTALLER, ROLE_WRITER, SCOPE_PROVIDER,
};
