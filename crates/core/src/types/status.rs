//! Status and role enums shared by the console screens.

use serde::{Deserialize, Serialize};

/// Display status of an entity row, mirroring its `enabled` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// Status label for an `enabled` flag.
    #[must_use]
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Active } else { Self::Inactive }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Platform user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Manages users across clients.
    SuperAdmin,
    /// Manages catalog and marketplace configuration.
    Admin,
    /// Regular console user.
    User,
}

/// Top-level console section a user lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SuperAdminUsers,
    Categories,
}

impl Section {
    /// Console path of the section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SuperAdminUsers => "/superadmin",
            Self::Categories => "/categories",
        }
    }
}

impl UserRole {
    /// Section shown right after login.
    #[must_use]
    pub const fn landing_section(self) -> Section {
        match self {
            Self::SuperAdmin => Section::SuperAdminUsers,
            Self::Admin | Self::User => Section::Categories,
        }
    }

    /// Whether the role may open the marketplace editor.
    #[must_use]
    pub const fn can_edit_marketplaces(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "SUPER_ADMIN"),
            Self::Admin => write!(f, "ADMIN"),
            Self::User => write!(f, "USER"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" | "SUPERADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mirrors_enabled() {
        assert_eq!(EntityStatus::from_enabled(true).label(), "Active");
        assert_eq!(EntityStatus::from_enabled(false).label(), "Inactive");
    }

    #[test]
    fn test_landing_section_by_role() {
        assert_eq!(
            UserRole::SuperAdmin.landing_section(),
            Section::SuperAdminUsers
        );
        assert_eq!(UserRole::Admin.landing_section().path(), "/categories");
        assert_eq!(UserRole::User.landing_section(), Section::Categories);
    }

    #[test]
    fn test_marketplace_edit_gate() {
        assert!(UserRole::Admin.can_edit_marketplaces());
        assert!(UserRole::SuperAdmin.can_edit_marketplaces());
        assert!(!UserRole::User.can_edit_marketplaces());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [UserRole::SuperAdmin, UserRole::Admin, UserRole::User] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
        assert_eq!("superadmin".parse::<UserRole>(), Ok(UserRole::SuperAdmin));
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"SUPER_ADMIN\""
        );
    }
}
