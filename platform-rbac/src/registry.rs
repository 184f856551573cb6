//! Fixed role registry
//!
//! This module provides the registry abstraction feature areas declare their
//! fixed roles against, and an in-memory implementation.

use std::collections::{BTreeMap, HashSet};
use std::sync::{PoisonError, RwLock};

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{AccessControlError, AccessControlResult};
use crate::roles::{validate_fixed_role, BuiltinRole, RoleDto, RoleRegistration};

/// Registry accepting fixed role declarations.
///
/// Implementations must treat one call as atomic: either every registration
/// in the batch is accepted, or none is visible afterwards. Duplicate names
/// must be rejected, never silently merged.
pub trait FixedRoleRegistry: Send + Sync {
    /// Declare a batch of fixed roles.
    ///
    /// # Errors
    ///
    /// Returns the reason the batch was rejected. Callers are expected to
    /// treat this as fatal to startup.
    fn declare_fixed_roles(&self, registrations: Vec<RoleRegistration>) -> AccessControlResult<()>;
}

/// In-memory fixed role registry.
///
/// This is suitable for single-process hosts and testing. Registrations are
/// keyed by role name.
///
/// # Example
///
/// ```
/// use platform_org::OrganizationRole;
/// use platform_rbac::{
///     fixed_role_name, Action, AccessControlError, BuiltinRole, FixedRoleRegistry,
///     MemoryRoleRegistry, Permission, RoleDto, RoleRegistration, ScopeProvider,
/// };
///
/// static TEAMS: ScopeProvider = ScopeProvider::new("teams");
///
/// let registration = RoleRegistration {
///     role: RoleDto {
///         name: fixed_role_name("teams:reader"),
///         display_name: "Team Reader".to_string(),
///         description: "Read all teams".to_string(),
///         group: "Teams".to_string(),
///         permissions: vec![Permission::new(
///             Action::from_static("teams:read"),
///             TEAMS.resource_all_scope(),
///         )],
///     },
///     grants: vec![BuiltinRole::Org(OrganizationRole::Viewer)],
/// };
///
/// let registry = MemoryRoleRegistry::new();
/// registry.declare_fixed_roles(vec![registration.clone()]).unwrap();
/// assert_eq!(registry.len(), 1);
///
/// // Names are unique: declaring again is rejected.
/// assert_eq!(
///     registry.declare_fixed_roles(vec![registration]),
///     Err(AccessControlError::DuplicateRole("fixedrole:teams:reader".to_string()))
/// );
/// ```
pub struct MemoryRoleRegistry {
    /// Registrations by role name
    roles: RwLock<BTreeMap<String, RoleRegistration>>,
    /// Registry behavior
    config: RegistryConfig,
}

impl std::fmt::Debug for MemoryRoleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRoleRegistry")
            .field("config", &self.config)
            .field("roles", &self.len())
            .finish()
    }
}

impl MemoryRoleRegistry {
    /// Create a new in-memory registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            roles: RwLock::new(BTreeMap::new()),
            config,
        }
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Look up a declared role by name.
    pub fn role(&self, name: &str) -> Option<RoleDto> {
        self.registration(name).map(|r| r.role)
    }

    /// Look up a registration (role and grants) by role name.
    pub fn registration(&self, name: &str) -> Option<RoleRegistration> {
        self.read().get(name).cloned()
    }

    /// All registrations, ordered by role name.
    pub fn registrations(&self) -> Vec<RoleRegistration> {
        self.read().values().cloned().collect()
    }

    /// Names of the roles granted directly to `builtin`, ordered by name.
    ///
    /// Grants are not expanded along the organization role hierarchy.
    pub fn roles_granted_to(&self, builtin: BuiltinRole) -> Vec<String> {
        self.read()
            .values()
            .filter(|r| r.is_granted_to(builtin))
            .map(|r| r.role.name.clone())
            .collect()
    }

    /// Number of declared roles.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if no role has been declared.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, RoleRegistration>> {
        self.roles.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate a batch against the current state, returning the
    /// registrations that need to be stored.
    fn validate_batch(
        &self,
        existing: &BTreeMap<String, RoleRegistration>,
        registrations: Vec<RoleRegistration>,
    ) -> AccessControlResult<Vec<RoleRegistration>> {
        let mut seen = HashSet::with_capacity(registrations.len());
        let mut accepted = Vec::with_capacity(registrations.len());

        for registration in registrations {
            validate_fixed_role(&registration.role)?;

            let name = registration.role.name.as_str();
            if !seen.insert(name.to_string()) {
                return Err(AccessControlError::DuplicateRole(name.to_string()));
            }

            match existing.get(name) {
                Some(stored)
                    if self.config.duplicate_policy == DuplicatePolicy::IgnoreIdentical
                        && *stored == registration =>
                {
                    tracing::debug!(role = %name, "Identical fixed role already declared, skipping");
                }
                Some(_) => return Err(AccessControlError::DuplicateRole(name.to_string())),
                None => accepted.push(registration),
            }
        }

        Ok(accepted)
    }
}

impl Default for MemoryRoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedRoleRegistry for MemoryRoleRegistry {
    fn declare_fixed_roles(&self, registrations: Vec<RoleRegistration>) -> AccessControlResult<()> {
        let count = registrations.len();

        // Held across validation and insert so a batch is checked against the
        // state it is applied to.
        let mut roles = self
            .roles
            .write()
            .map_err(|_| AccessControlError::Internal("role registry lock poisoned".to_string()))?;

        let accepted = match self.validate_batch(&roles, registrations) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), count, "Fixed role declaration rejected");
                return Err(e);
            }
        };

        if !self.config.enabled {
            tracing::debug!(count, "Access control disabled, fixed roles not stored");
            return Ok(());
        }

        for registration in accepted {
            tracing::info!(
                role = %registration.role.name,
                permissions = registration.role.permissions.len(),
                grants = ?registration.grants,
                "Fixed role declared"
            );
            roles.insert(registration.role.name.clone(), registration);
        }

        Ok(())
    }
}
