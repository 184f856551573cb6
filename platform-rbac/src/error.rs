//! Error types for access-control operations
//!
//! This module defines the errors raised while building identifiers and while
//! declaring fixed roles against a registry.

use thiserror::Error;

/// Access-control error types.
///
/// From a declaring feature area's point of view every variant means the same
/// thing: the registration was rejected. The variants exist so the host can
/// report *why* before refusing to start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessControlError {
    /// A role with this name is already registered, or appears twice in one batch
    #[error("Fixed role already declared: {0}")]
    DuplicateRole(String),

    /// A fixed role name does not carry the fixed-role prefix
    #[error("Fixed role name is missing the '{prefix}' prefix: {name}")]
    MissingFixedRolePrefix {
        /// Offending role name.
        name: String,
        /// Prefix every fixed role must start with.
        prefix: &'static str,
    },

    /// Action identifier is malformed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Scope identifier is malformed
    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    /// Scope provider root is malformed
    #[error("Invalid scope root: {0}")]
    InvalidScopeRoot(String),

    /// Grant target is neither an organization role nor the server admin
    #[error("Invalid built-in role: {0}")]
    InvalidBuiltinRole(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal registry error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for access-control operations.
pub type AccessControlResult<T> = Result<T, AccessControlError>;

impl AccessControlError {
    /// Check if this error is a fault of the registry rather than of the
    /// declared data.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AccessControlError::Internal(_) | AccessControlError::ConfigError(_)
        )
    }

    /// Get error code for logs and API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessControlError::DuplicateRole(_) => "DUPLICATE_ROLE",
            AccessControlError::MissingFixedRolePrefix { .. } => "MISSING_FIXED_ROLE_PREFIX",
            AccessControlError::InvalidAction(_) => "INVALID_ACTION",
            AccessControlError::InvalidScope(_) => "INVALID_SCOPE",
            AccessControlError::InvalidScopeRoot(_) => "INVALID_SCOPE_ROOT",
            AccessControlError::InvalidBuiltinRole(_) => "INVALID_BUILTIN_ROLE",
            AccessControlError::ConfigError(_) => "CONFIG_ERROR",
            AccessControlError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccessControlError::DuplicateRole("fixedrole:teams:reader".to_string());
        assert_eq!(
            err.to_string(),
            "Fixed role already declared: fixedrole:teams:reader"
        );

        let err = AccessControlError::MissingFixedRolePrefix {
            name: "teams:reader".to_string(),
            prefix: "fixedrole:",
        };
        assert_eq!(
            err.to_string(),
            "Fixed role name is missing the 'fixedrole:' prefix: teams:reader"
        );
    }

    #[test]
    fn test_server_errors() {
        assert!(AccessControlError::Internal("lock".to_string()).is_server_error());
        assert!(!AccessControlError::DuplicateRole("x".to_string()).is_server_error());
        assert!(!AccessControlError::InvalidScope("a*b".to_string()).is_server_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AccessControlError::DuplicateRole("x".to_string()).error_code(),
            "DUPLICATE_ROLE"
        );
        assert_eq!(
            AccessControlError::InvalidBuiltinRole("owner".to_string()).error_code(),
            "INVALID_BUILTIN_ROLE"
        );
    }
}
