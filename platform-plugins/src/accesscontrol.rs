//! Plugin fixed roles
//!
//! Declares the built-in roles of the plugin manager:
//!
//! | Role                           | Permissions                      | Granted to           |
//! |--------------------------------|----------------------------------|----------------------|
//! | `fixedrole:plugins.app:reader` | `plugins.app:access`             | Viewer               |
//! | `fixedrole:plugins:writer`     | `plugins:write`                  | Server Admin, Admin  |
//! | `fixedrole:plugins:installer`  | writer + `plugins:install`       | Server Admin         |
//!
//! Every permission applies to `plugins:*`.

use platform_org::OrganizationRole;
use platform_rbac::{
    concat_permissions, Action, AccessControlResult, BuiltinRole, FixedRoleRegistry, Permission,
    RoleDto, RoleRegistration, ScopeProvider,
};

/// Access application plugins.
pub const ACTION_APP_ACCESS: Action = Action::from_static("plugins.app:access");

/// Update plugin settings.
pub const ACTION_PLUGINS_WRITE: Action = Action::from_static("plugins:write");

/// Install plugins. There is no separate uninstall action.
pub const ACTION_PLUGINS_INSTALL: Action = Action::from_static("plugins:install");

/// Scopes for plugin resources (`plugins:...`).
pub static SCOPE_PROVIDER: ScopeProvider = ScopeProvider::new("plugins");

/// Name of the application plugins reader role.
pub const ROLE_APP_READER: &str = "fixedrole:plugins.app:reader";

/// Name of the plugins writer role.
pub const ROLE_WRITER: &str = "fixedrole:plugins:writer";

/// Name of the plugins installer role.
pub const ROLE_INSTALLER: &str = "fixedrole:plugins:installer";

const GROUP: &str = "Plugins";

/// Reader role for application plugins.
///
/// Organization membership is still enforced on top of this role, so
/// granting it to the lowest organization role is safe.
pub fn app_reader_registration() -> RoleRegistration {
    RoleRegistration {
        role: RoleDto {
            name: ROLE_APP_READER.to_string(),
            display_name: "Application Plugins Access".to_string(),
            description: "Access application plugins (still enforcing the organization role)"
                .to_string(),
            group: GROUP.to_string(),
            permissions: vec![Permission::new(
                ACTION_APP_ACCESS,
                SCOPE_PROVIDER.resource_all_scope(),
            )],
        },
        grants: vec![BuiltinRole::Org(OrganizationRole::Viewer)],
    }
}

/// Writer role: update plugin settings.
pub fn writer_registration() -> RoleRegistration {
    RoleRegistration {
        role: RoleDto {
            name: ROLE_WRITER.to_string(),
            display_name: "Plugins Writer".to_string(),
            description: "Update plugin settings".to_string(),
            group: GROUP.to_string(),
            permissions: vec![Permission::new(
                ACTION_PLUGINS_WRITE,
                SCOPE_PROVIDER.resource_all_scope(),
            )],
        },
        grants: vec![
            BuiltinRole::ServerAdmin,
            BuiltinRole::Org(OrganizationRole::Admin),
        ],
    }
}

/// Installer role: everything `writer` carries, plus install.
///
/// Installing brings new code into the host, so only the server admin is
/// granted this role.
pub fn installer_registration(writer: &RoleDto) -> RoleRegistration {
    RoleRegistration {
        role: RoleDto {
            name: ROLE_INSTALLER.to_string(),
            display_name: "Plugins Installer".to_string(),
            description: "Install plugins".to_string(),
            group: GROUP.to_string(),
            permissions: concat_permissions(
                &writer.permissions,
                &[Permission::new(
                    ACTION_PLUGINS_INSTALL,
                    SCOPE_PROVIDER.resource_all_scope(),
                )],
            ),
        },
        grants: vec![BuiltinRole::ServerAdmin],
    }
}

/// Build the full set of plugin role registrations, base roles first.
pub fn fixed_role_registrations() -> Vec<RoleRegistration> {
    let reader = app_reader_registration();
    let writer = writer_registration();
    let installer = installer_registration(&writer.role);

    vec![reader, writer, installer]
}

/// Declare the plugin fixed roles against `registry` in a single batch.
///
/// # Errors
///
/// Returns the registry's error unchanged. Hosts should refuse to start when
/// this fails.
///
/// # Example
///
/// ```
/// use platform_plugins::declare_rbac_roles;
/// use platform_rbac::MemoryRoleRegistry;
///
/// let registry = MemoryRoleRegistry::new();
/// declare_rbac_roles(&registry).unwrap();
/// assert_eq!(registry.len(), 3);
/// ```
pub fn declare_rbac_roles<R>(registry: &R) -> AccessControlResult<()>
where
    R: FixedRoleRegistry + ?Sized,
{
    let registrations = fixed_role_registrations();
    tracing::debug!(count = registrations.len(), "Declaring plugin fixed roles");
    registry.declare_fixed_roles(registrations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_rbac::{fixed_role_name, Scope, FIXED_ROLE_PREFIX};
    use std::collections::HashSet;

    fn by_name(name: &str) -> RoleRegistration {
        fixed_role_registrations()
            .into_iter()
            .find(|r| r.role.name == name)
            .unwrap()
    }

    #[test]
    fn test_role_names() {
        let names: Vec<String> = fixed_role_registrations()
            .into_iter()
            .map(|r| r.role.name)
            .collect();
        assert_eq!(names, vec![ROLE_APP_READER, ROLE_WRITER, ROLE_INSTALLER]);

        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());

        for name in &names {
            assert!(name.starts_with(FIXED_ROLE_PREFIX), "{name} is not a fixed role");
        }
    }

    #[test]
    fn test_role_names_use_fixed_prefix() {
        assert_eq!(ROLE_APP_READER, fixed_role_name("plugins.app:reader"));
        assert_eq!(ROLE_WRITER, fixed_role_name("plugins:writer"));
        assert_eq!(ROLE_INSTALLER, fixed_role_name("plugins:installer"));
    }

    #[test]
    fn test_registrations_are_stable() {
        assert_eq!(fixed_role_registrations(), fixed_role_registrations());
    }

    #[test]
    fn test_grants() {
        assert_eq!(
            by_name(ROLE_APP_READER).grants,
            vec![BuiltinRole::Org(OrganizationRole::Viewer)]
        );
        assert_eq!(
            by_name(ROLE_WRITER).grants,
            vec![BuiltinRole::ServerAdmin, BuiltinRole::Org(OrganizationRole::Admin)]
        );
        assert_eq!(by_name(ROLE_INSTALLER).grants, vec![BuiltinRole::ServerAdmin]);
    }

    #[test]
    fn test_installer_never_granted_to_org_roles() {
        let installer = by_name(ROLE_INSTALLER);
        for role in OrganizationRole::all() {
            assert!(!installer.is_granted_to(role.into()));
        }
    }

    #[test]
    fn test_installer_is_strict_superset_of_writer() {
        let writer = by_name(ROLE_WRITER).role;
        let installer = by_name(ROLE_INSTALLER).role;

        assert!(installer.includes_permissions_of(&writer));
        assert!(!writer.includes_permissions_of(&installer));
        assert_eq!(
            installer.permissions,
            vec![
                Permission::new(ACTION_PLUGINS_WRITE, SCOPE_PROVIDER.resource_all_scope()),
                Permission::new(ACTION_PLUGINS_INSTALL, SCOPE_PROVIDER.resource_all_scope()),
            ]
        );
    }

    #[test]
    fn test_installer_tracks_writer_permissions() {
        let mut writer = writer_registration().role;
        let settings_read = Permission::new(
            Action::from_static("plugins.settings:read"),
            SCOPE_PROVIDER.resource_all_scope(),
        );
        writer.permissions.push(settings_read.clone());

        let installer = installer_registration(&writer).role;
        assert!(installer.includes_permissions_of(&writer));
        assert!(installer.permissions.contains(&settings_read));
        assert_eq!(installer.permissions.len(), writer.permissions.len() + 1);
    }

    #[test]
    fn test_scopes_are_plugin_scopes() {
        for registration in fixed_role_registrations() {
            for perm in &registration.role.permissions {
                assert!(perm.scope.as_str().starts_with("plugins:"));
                assert!(SCOPE_PROVIDER.owns(&perm.scope));
            }
        }

        let other = ScopeProvider::new("plugins.app");
        assert!(!SCOPE_PROVIDER.owns(&other.resource_all_scope()));
        assert_ne!(other.resource_all_scope(), SCOPE_PROVIDER.resource_all_scope());
        assert_eq!(SCOPE_PROVIDER.resource_all_scope(), Scope::new("plugins:*").unwrap());
    }

    #[test]
    fn test_actions_belong_to_plugin_areas() {
        assert_eq!(ACTION_APP_ACCESS.as_str(), "plugins.app:access");
        assert_eq!(ACTION_PLUGINS_WRITE.as_str(), "plugins:write");
        assert_eq!(ACTION_PLUGINS_INSTALL.as_str(), "plugins:install");

        for registration in fixed_role_registrations() {
            for perm in &registration.role.permissions {
                assert!(perm.action.area().starts_with("plugins"));
            }
        }
    }

    #[test]
    fn test_role_display_data() {
        let reader = by_name(ROLE_APP_READER).role;
        assert_eq!(reader.display_name, "Application Plugins Access");
        assert_eq!(reader.group, "Plugins");

        let installer = by_name(ROLE_INSTALLER).role;
        assert_eq!(installer.display_name, "Plugins Installer");
        assert_eq!(installer.description, "Install plugins");
    }
}
