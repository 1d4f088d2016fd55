//! Employee and role types.

use serde::{Deserialize, Serialize};
use shiftgate_shared::types::EmployeeId;
use thiserror::Error;

/// Employee roles at a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Rings up sales at a terminal.
    Cashier,
    /// Oversees cashiers on the floor.
    Supervisor,
    /// Maintains terminals and store configuration.
    ItAdmin,
    /// Runs the store.
    Manager,
}

impl Role {
    /// All roles, in ascending order of privilege.
    pub const ALL: [Self; 4] = [
        Self::Cashier,
        Self::Supervisor,
        Self::ItAdmin,
        Self::Manager,
    ];

    /// Returns true if this role gets the administrative UI.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::ItAdmin | Self::Manager)
    }

    /// Returns the storage/wire name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cashier => "cashier",
            Self::Supervisor => "supervisor",
            Self::ItAdmin => "it_admin",
            Self::Manager => "manager",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name that is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// An employee as stored in the directory.
#[derive(Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Login name.
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role at the store.
    pub role: Role,
    /// Archived employees can no longer log in.
    pub is_archived: bool,
}

impl Employee {
    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns true if the employee gets the administrative UI.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl std::fmt::Debug for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Employee")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[hidden]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("is_archived", &self.is_archived)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_roles() {
        assert!(!Role::Cashier.is_admin());
        assert!(!Role::Supervisor.is_admin());
        assert!(Role::ItAdmin.is_admin());
        assert!(Role::Manager.is_admin());
    }

    #[test]
    fn test_role_from_str_round_trips_known_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert_eq!(
            "admin".parse::<Role>(),
            Err(UnknownRole("admin".to_string()))
        );
        assert!("Cashier".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::ItAdmin).unwrap(),
            "\"it_admin\""
        );
    }

    #[test]
    fn test_full_name_and_debug() {
        let employee = Employee {
            id: EmployeeId::new(),
            username: "ada".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Cashier,
            is_archived: false,
        };

        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert!(!format!("{employee:?}").contains("secret"));
    }
}
