use super::*;

impl InventoryService {
    /// Creates a new clothing pool with zero assignments.
    pub async fn create_clothing_pool(
        &self,
        actor: &ActorIdentity,
        category: impl Into<String>,
        size: impl Into<String>,
        initial_quantity: u32,
    ) -> AppResult<ClothingPool> {
        self.authorization_service
            .require_permission(actor, Permission::ManageClothing)?;

        let pool = ClothingPool::new(category, size, initial_quantity)?;
        self.repository.save_clothing_pool(pool.clone()).await?;

        Ok(pool)
    }

    /// Lists every clothing pool with its assignment records.
    pub async fn list_clothing_pools(&self, actor: &ActorIdentity) -> AppResult<Vec<ClothingPool>> {
        self.authorization_service
            .require_permission(actor, Permission::ViewAssignments)?;

        self.repository.list_clothing_pools().await
    }

    /// Returns one clothing pool.
    pub async fn find_clothing_pool(
        &self,
        actor: &ActorIdentity,
        pool_id: ClothingPoolId,
    ) -> AppResult<ClothingPool> {
        self.authorization_service
            .require_permission(actor, Permission::ViewAssignments)?;

        self.repository
            .find_clothing_pool(pool_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("clothing pool '{pool_id}' does not exist")))
    }

    /// Adjusts a pool's owned quantity by a positive or negative delta.
    pub async fn adjust_clothing_quantity(
        &self,
        actor: &ActorIdentity,
        pool_id: ClothingPoolId,
        delta: i64,
    ) -> AppResult<ClothingPool> {
        self.authorization_service
            .require_permission(actor, Permission::ManageClothing)?;

        self.repository
            .adjust_clothing_quantity(pool_id, delta)
            .await
    }

    /// Hands a quantity of a pool to an assignee.
    pub async fn assign_clothing(
        &self,
        actor: &ActorIdentity,
        pool_id: ClothingPoolId,
        assignee: &str,
        quantity: u32,
    ) -> AppResult<ClothingPool> {
        self.authorization_service
            .require_permission(actor, Permission::ManageClothing)?;

        self.repository
            .assign_clothing(pool_id, assignee, quantity)
            .await
    }

    /// Takes back an assignee's entire share of a pool.
    pub async fn unassign_clothing(
        &self,
        actor: &ActorIdentity,
        pool_id: ClothingPoolId,
        assignee: &str,
    ) -> AppResult<ClothingPool> {
        self.authorization_service
            .require_permission(actor, Permission::ManageClothing)?;

        self.repository.unassign_clothing(pool_id, assignee).await
    }
}
