use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;
use std::sync::Arc;

use kapelle_core::{AppError, AppResult};
use kapelle_domain::{ActorIdentity, Permission, Role};

/// Immutable role to permission-set mapping.
///
/// Loaded once at process start; roles without an entry hold nothing.
#[derive(Debug, Clone, Default)]
pub struct RolePermissionTable {
    grants: HashMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionTable {
    /// Creates a table from explicit grants.
    #[must_use]
    pub fn new(grants: HashMap<Role, BTreeSet<Permission>>) -> Self {
        Self { grants }
    }

    /// Builds the club's standard permission table.
    #[must_use]
    pub fn club_defaults() -> Self {
        let grants = HashMap::from([
            (
                Role::ClubLeader,
                BTreeSet::from([
                    Permission::ViewAll,
                    Permission::ManageUsers,
                    Permission::ManageDepartments,
                    Permission::ManageClasses,
                    Permission::ManageTraining,
                    Permission::ManageInventory,
                    Permission::ManageEvents,
                    Permission::ViewReports,
                    Permission::ManageMembers,
                ]),
            ),
            (
                Role::DepartmentLeader,
                BTreeSet::from([
                    Permission::ViewDepartment,
                    Permission::ManageClassLeaders,
                    Permission::ManageTraining,
                    Permission::ViewClassReports,
                ]),
            ),
            (
                Role::ClassLeader,
                BTreeSet::from([
                    Permission::ManageClass,
                    Permission::ManageClassMembers,
                    Permission::ScheduleSessions,
                    Permission::ManageTraining,
                ]),
            ),
            (
                Role::Trainer,
                BTreeSet::from([
                    Permission::CreateSessions,
                    Permission::UploadMaterials,
                    Permission::RateTrainees,
                    Permission::AccessLibrary,
                ]),
            ),
            (
                Role::Trainee,
                BTreeSet::from([
                    Permission::ViewSchedule,
                    Permission::AccessLibrary,
                    Permission::SubmitHomework,
                ]),
            ),
            (
                Role::InventoryManager,
                BTreeSet::from([
                    Permission::ManageInstruments,
                    Permission::ManageClothing,
                    Permission::ViewAssignments,
                ]),
            ),
            (
                Role::MemberManager,
                BTreeSet::from([
                    Permission::GenerateReports,
                    Permission::ManageMemberStatus,
                    Permission::ViewMembers,
                ]),
            ),
            (
                Role::Guest,
                BTreeSet::from([Permission::ViewEvents, Permission::ViewClubInfo]),
            ),
        ]);

        Self { grants }
    }

    /// Returns the permission set configured for a role, if any.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> Option<&BTreeSet<Permission>> {
        self.grants.get(&role)
    }
}

/// Application service for flat role permission checks.
///
/// The table is read-only after construction, so the service is shared
/// across concurrent callers without locking.
#[derive(Clone)]
pub struct AuthorizationService {
    table: Arc<RolePermissionTable>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a permission table.
    #[must_use]
    pub fn new(table: RolePermissionTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns whether the role holds the permission.
    ///
    /// Roles without a table entry hold nothing.
    #[must_use]
    pub fn authorize(&self, role: Role, permission: Permission) -> bool {
        self.table
            .permissions_for(role)
            .map(|permissions| permissions.contains(&permission))
            .unwrap_or(false)
    }

    /// Returns whether a raw role identifier holds the permission.
    ///
    /// Unknown identifiers are treated as holding nothing rather than as an
    /// error.
    #[must_use]
    pub fn authorize_value(&self, role: &str, permission: Permission) -> bool {
        Role::from_str(role)
            .map(|role| self.authorize(role, permission))
            .unwrap_or(false)
    }

    /// Ensures the actor's role holds the required permission.
    pub fn require_permission(
        &self,
        actor: &ActorIdentity,
        permission: Permission,
    ) -> AppResult<()> {
        if self.authorize(actor.role(), permission) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "subject '{}' with role '{}' is missing permission '{}'",
            actor.subject(),
            actor.role().as_str(),
            permission.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use kapelle_domain::{ActorIdentity, Permission, Role};

    use super::{AuthorizationService, RolePermissionTable};

    #[test]
    fn inventory_manager_holds_inventory_permissions() {
        let service = AuthorizationService::new(RolePermissionTable::club_defaults());

        assert!(service.authorize(Role::InventoryManager, Permission::ManageInstruments));
        assert!(service.authorize(Role::InventoryManager, Permission::ManageClothing));
        assert!(service.authorize(Role::InventoryManager, Permission::ViewAssignments));
    }

    #[test]
    fn trainee_does_not_hold_inventory_permissions() {
        let service = AuthorizationService::new(RolePermissionTable::club_defaults());

        assert!(!service.authorize(Role::Trainee, Permission::ManageInstruments));
        assert!(service.authorize(Role::Trainee, Permission::AccessLibrary));
    }

    #[test]
    fn unknown_role_value_is_denied_everything() {
        let service = AuthorizationService::new(RolePermissionTable::club_defaults());

        for permission in Permission::all() {
            assert!(!service.authorize_value("unknown-role", *permission));
        }
        assert!(service.authorize_value("inventory-manager", Permission::ManageInstruments));
    }

    #[test]
    fn role_missing_from_the_table_is_denied() {
        let service = AuthorizationService::new(RolePermissionTable::new(HashMap::new()));

        assert!(!service.authorize(Role::ClubLeader, Permission::ViewAll));
    }

    #[test]
    fn require_permission_rejects_with_forbidden() {
        let service = AuthorizationService::new(RolePermissionTable::club_defaults());
        let actor = ActorIdentity::new("trainee@club.com", Role::Trainee);

        let result = service.require_permission(&actor, Permission::ManageClothing);
        assert!(matches!(
            result,
            Err(kapelle_core::AppError::Forbidden(_))
        ));

        let allowed = service.require_permission(&actor, Permission::SubmitHomework);
        assert!(allowed.is_ok());
    }
}
