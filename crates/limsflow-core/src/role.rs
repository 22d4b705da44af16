use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Closed set of user roles, declared from highest to lowest privilege.
/// `rank()` is the declaration index, so a lower rank means more privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    LabManager,
    LabTechnician,
    Billing,
    Readonly,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::SuperAdmin,
            Role::Admin,
            Role::LabManager,
            Role::LabTechnician,
            Role::Billing,
            Role::Readonly,
        ]
    }

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::LabManager => "LAB_MANAGER",
            Role::LabTechnician => "LAB_TECHNICIAN",
            Role::Billing => "BILLING",
            Role::Readonly => "READONLY",
        }
    }

    /// Parse a role string, mapping anything unknown to `None` instead of an
    /// error. Unranked callers fail every minimum-role check.
    pub fn parse_lossy(s: &str) -> Option<Role> {
        Role::all().iter().copied().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownRole(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Minimum-role checks
// ---------------------------------------------------------------------------

/// True iff `user` carries at least the privilege of `required`.
/// An unranked user (`None`) can never satisfy any requirement.
pub fn has_minimum_role(user: Option<Role>, required: Role) -> bool {
    match user {
        Some(role) => role.rank() <= required.rank(),
        None => false,
    }
}

/// String-boundary variant: unknown role strings fail closed.
pub fn has_minimum_role_str(user: &str, required: Role) -> bool {
    has_minimum_role(Role::parse_lossy(user), required)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
