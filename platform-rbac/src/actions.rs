//! # Actions
//!
//! Action identifiers name the operations a permission allows.
//!
//! Actions are owned by feature areas and follow the `<area>:<verb>`
//! convention, e.g. `plugins:write` or `plugins.app:access`. The area part
//! keeps actions declared by different feature areas from colliding.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::{AccessControlError, AccessControlResult};

/// An action that can be performed on a scope.
///
/// Static actions are declared as constants and validated at compile time:
///
/// ```
/// use platform_rbac::Action;
///
/// const ACTION_TEAMS_READ: Action = Action::from_static("teams:read");
///
/// assert_eq!(ACTION_TEAMS_READ.as_str(), "teams:read");
/// assert_eq!(ACTION_TEAMS_READ.area(), "teams");
/// assert_eq!(ACTION_TEAMS_READ.verb(), "read");
/// ```
///
/// Actions built at runtime go through [`Action::new`]:
///
/// ```
/// use platform_rbac::Action;
///
/// assert!(Action::new("teams:read").is_ok());
/// assert!(Action::new("read").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Action(Cow<'static, str>);

impl Action {
    /// Create an action from a static string.
    ///
    /// # Panics
    ///
    /// Panics if `action` is not of the form `<area>:<verb>`. In a `const`
    /// context this is a compile error.
    pub const fn from_static(action: &'static str) -> Self {
        assert!(is_valid_action(action), "action must be of the form <area>:<verb>");
        Self(Cow::Borrowed(action))
    }

    /// Create an action from a runtime string.
    ///
    /// # Errors
    ///
    /// Returns [`AccessControlError::InvalidAction`] if the string is not of
    /// the form `<area>:<verb>`.
    pub fn new(action: impl Into<String>) -> AccessControlResult<Self> {
        let action = action.into();
        if !is_valid_action(&action) {
            return Err(AccessControlError::InvalidAction(action));
        }
        Ok(Self(Cow::Owned(action)))
    }

    /// Get the string representation of the action.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The feature area that owns this action (the part before the first `:`).
    pub fn area(&self) -> &str {
        self.0.split_once(':').map_or(&*self.0, |(area, _)| area)
    }

    /// The operation part of the action (everything after the first `:`).
    pub fn verb(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, verb)| verb)
    }
}

/// `<area>:<verb>`, both parts non-empty, made of `[A-Za-z0-9._-]` with any
/// further `:` allowed in the verb.
const fn is_valid_action(action: &str) -> bool {
    let bytes = action.as_bytes();
    let mut separator = 0;
    let mut found = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b':' {
            if !found {
                found = true;
                separator = i;
            }
        } else if !(b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'-') {
            return false;
        }
        i += 1;
    }
    found && separator > 0 && separator + 1 < bytes.len()
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Action {
    type Error = AccessControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.0.into_owned()
    }
}
