use std::str::FromStr;

use kapelle_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions enforced by application policy checks.
///
/// Each token names one allowed action. The token set is process-wide
/// static configuration loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    /// Allows reading everything in the club.
    ViewAll,
    /// Allows managing user accounts.
    ManageUsers,
    /// Allows managing departments.
    ManageDepartments,
    /// Allows managing classes.
    ManageClasses,
    /// Allows managing the training program.
    ManageTraining,
    /// Allows managing the whole inventory area.
    ManageInventory,
    /// Allows managing club events.
    ManageEvents,
    /// Allows reading club-wide reports.
    ViewReports,
    /// Allows managing member records.
    ManageMembers,
    /// Allows reading one department's data.
    ViewDepartment,
    /// Allows managing class leaders in a department.
    ManageClassLeaders,
    /// Allows reading class-level reports.
    ViewClassReports,
    /// Allows managing one class.
    ManageClass,
    /// Allows managing one class's members.
    ManageClassMembers,
    /// Allows scheduling training sessions.
    ScheduleSessions,
    /// Allows creating training sessions.
    CreateSessions,
    /// Allows uploading training materials.
    UploadMaterials,
    /// Allows rating trainees.
    RateTrainees,
    /// Allows reading the materials library.
    AccessLibrary,
    /// Allows reading the personal schedule.
    ViewSchedule,
    /// Allows submitting homework.
    SubmitHomework,
    /// Allows mutating instrument records.
    ManageInstruments,
    /// Allows mutating clothing stock.
    ManageClothing,
    /// Allows reading inventory assignments.
    ViewAssignments,
    /// Allows generating member reports.
    GenerateReports,
    /// Allows changing member status.
    ManageMemberStatus,
    /// Allows reading member records.
    ViewMembers,
    /// Allows reading public events.
    ViewEvents,
    /// Allows reading public club information.
    ViewClubInfo,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewAll => "view-all",
            Self::ManageUsers => "manage-users",
            Self::ManageDepartments => "manage-departments",
            Self::ManageClasses => "manage-classes",
            Self::ManageTraining => "manage-training",
            Self::ManageInventory => "manage-inventory",
            Self::ManageEvents => "manage-events",
            Self::ViewReports => "view-reports",
            Self::ManageMembers => "manage-members",
            Self::ViewDepartment => "view-department",
            Self::ManageClassLeaders => "manage-class-leaders",
            Self::ViewClassReports => "view-class-reports",
            Self::ManageClass => "manage-class",
            Self::ManageClassMembers => "manage-class-members",
            Self::ScheduleSessions => "schedule-sessions",
            Self::CreateSessions => "create-sessions",
            Self::UploadMaterials => "upload-materials",
            Self::RateTrainees => "rate-trainees",
            Self::AccessLibrary => "access-library",
            Self::ViewSchedule => "view-schedule",
            Self::SubmitHomework => "submit-homework",
            Self::ManageInstruments => "manage-instruments",
            Self::ManageClothing => "manage-clothing",
            Self::ViewAssignments => "view-assignments",
            Self::GenerateReports => "generate-reports",
            Self::ManageMemberStatus => "manage-member-status",
            Self::ViewMembers => "view-members",
            Self::ViewEvents => "view-events",
            Self::ViewClubInfo => "view-club-info",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewAll,
            Permission::ManageUsers,
            Permission::ManageDepartments,
            Permission::ManageClasses,
            Permission::ManageTraining,
            Permission::ManageInventory,
            Permission::ManageEvents,
            Permission::ViewReports,
            Permission::ManageMembers,
            Permission::ViewDepartment,
            Permission::ManageClassLeaders,
            Permission::ViewClassReports,
            Permission::ManageClass,
            Permission::ManageClassMembers,
            Permission::ScheduleSessions,
            Permission::CreateSessions,
            Permission::UploadMaterials,
            Permission::RateTrainees,
            Permission::AccessLibrary,
            Permission::ViewSchedule,
            Permission::SubmitHomework,
            Permission::ManageInstruments,
            Permission::ManageClothing,
            Permission::ViewAssignments,
            Permission::GenerateReports,
            Permission::ManageMemberStatus,
            Permission::ViewMembers,
            Permission::ViewEvents,
            Permission::ViewClubInfo,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|permission| permission.as_str() == value)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Permission;

    #[test]
    fn permission_roundtrip_storage_value() {
        for permission in Permission::all() {
            let restored = Permission::from_str(permission.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Permission::ViewClubInfo), *permission);
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("manage-orchestra");
        assert!(parsed.is_err());
    }
}
