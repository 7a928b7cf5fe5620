use std::str::FromStr;

use kapelle_core::AppError;
use serde::{Deserialize, Serialize};

/// Actor categories recognized by the club.
///
/// A role is assigned when the actor is registered and is never reassigned
/// by the inventory ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Leads the whole club.
    ClubLeader,
    /// Leads one department.
    DepartmentLeader,
    /// Leads one class.
    ClassLeader,
    /// Teaches training sessions.
    Trainer,
    /// Attends training sessions.
    Trainee,
    /// Manages instruments and clothing stock.
    InventoryManager,
    /// Manages member records and reports.
    MemberManager,
    /// Unregistered visitor.
    Guest,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClubLeader => "club-leader",
            Self::DepartmentLeader => "department-leader",
            Self::ClassLeader => "class-leader",
            Self::Trainer => "trainer",
            Self::Trainee => "trainee",
            Self::InventoryManager => "inventory-manager",
            Self::MemberManager => "member-manager",
            Self::Guest => "guest",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::ClubLeader,
            Role::DepartmentLeader,
            Role::ClassLeader,
            Role::Trainer,
            Role::Trainee,
            Role::InventoryManager,
            Role::MemberManager,
            Role::Guest,
        ];

        ALL
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "club-leader" => Ok(Self::ClubLeader),
            "department-leader" => Ok(Self::DepartmentLeader),
            "class-leader" => Ok(Self::ClassLeader),
            "trainer" => Ok(Self::Trainer),
            "trainee" => Ok(Self::Trainee),
            "inventory-manager" => Ok(Self::InventoryManager),
            "member-manager" => Ok(Self::MemberManager),
            "guest" => Ok(Self::Guest),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Guest), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = Role::from_str("orchestra-conductor");
        assert!(parsed.is_err());
    }
}
