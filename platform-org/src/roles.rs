//! Built-in organization roles
//!
//! This module defines the organization role hierarchy that fixed RBAC roles
//! are granted to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role within an organization.
///
/// Roles are hierarchical, with each role including the privileges of lower roles.
/// The hierarchy is: Viewer < Editor < Admin
///
/// # Permission Model
///
/// - **Viewer**: Read-only access to organization resources
/// - **Editor**: Can create and edit content
/// - **Admin**: Can manage organization configuration, members and plugins
///
/// # Examples
///
/// ```
/// use platform_org::OrganizationRole;
///
/// let role = OrganizationRole::Editor;
/// assert!(role.includes(OrganizationRole::Viewer));
/// assert!(!role.includes(OrganizationRole::Admin));
/// ```
///
/// Serialized as the display name (`"Viewer"`, `"Editor"`, `"Admin"`), the
/// same identifier fixed-role grants use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrganizationRole {
    /// Read-only access to organization resources
    Viewer = 1,

    /// Can create and edit content
    Editor = 2,

    /// Can manage the organization
    Admin = 3,
}

impl OrganizationRole {
    /// Check if holding this role also means holding `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_org::OrganizationRole;
    ///
    /// assert!(OrganizationRole::Admin.includes(OrganizationRole::Editor));
    /// assert!(OrganizationRole::Viewer.includes(OrganizationRole::Viewer));
    /// assert!(!OrganizationRole::Viewer.includes(OrganizationRole::Editor));
    /// ```
    pub fn includes(&self, other: OrganizationRole) -> bool {
        *self >= other
    }

    /// Get all roles, lowest privilege first.
    pub fn all() -> [Self; 3] {
        [Self::Viewer, Self::Editor, Self::Admin]
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(OrganizationRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_org::OrganizationRole;
    ///
    /// assert_eq!(OrganizationRole::parse("admin"), Some(OrganizationRole::Admin));
    /// assert_eq!(OrganizationRole::parse("VIEWER"), Some(OrganizationRole::Viewer));
    /// assert_eq!(OrganizationRole::parse("owner"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// This is also the identifier fixed-role grants are recorded under.
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_org::OrganizationRole;
    ///
    /// assert_eq!(OrganizationRole::Admin.display_name(), "Admin");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Editor => "Editor",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
