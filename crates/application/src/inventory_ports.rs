use async_trait::async_trait;
use kapelle_core::AppResult;
use kapelle_domain::{
    ClothingPool, ClothingPoolId, Instrument, InstrumentCondition, InstrumentId,
};

/// Filters for instrument listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentListFilter {
    /// Keep only instruments in this condition.
    pub condition: Option<InstrumentCondition>,
    /// Keep only instruments with this type label.
    pub instrument_type: Option<String>,
}

/// Repository port for the inventory store.
///
/// Every mutation runs its whole check-and-write sequence under the
/// store's per-resource exclusivity, so two concurrent assigns can never
/// both observe the same free capacity.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Stores a new clothing pool.
    async fn save_clothing_pool(&self, pool: ClothingPool) -> AppResult<()>;

    /// Lists pools ordered by category and size.
    async fn list_clothing_pools(&self) -> AppResult<Vec<ClothingPool>>;

    /// Finds one pool by identifier.
    async fn find_clothing_pool(
        &self,
        pool_id: ClothingPoolId,
    ) -> AppResult<Option<ClothingPool>>;

    /// Applies a total-quantity delta to one pool.
    async fn adjust_clothing_quantity(
        &self,
        pool_id: ClothingPoolId,
        delta: i64,
    ) -> AppResult<ClothingPool>;

    /// Hands a quantity of one pool to an assignee.
    async fn assign_clothing(
        &self,
        pool_id: ClothingPoolId,
        assignee: &str,
        quantity: u32,
    ) -> AppResult<ClothingPool>;

    /// Removes an assignee's entire record from one pool.
    async fn unassign_clothing(
        &self,
        pool_id: ClothingPoolId,
        assignee: &str,
    ) -> AppResult<ClothingPool>;

    /// Stores a new instrument, rejecting duplicate unique codes.
    async fn save_instrument(&self, instrument: Instrument) -> AppResult<()>;

    /// Lists instruments matching the filter, ordered by unique code.
    async fn list_instruments(&self, filter: InstrumentListFilter) -> AppResult<Vec<Instrument>>;

    /// Finds one instrument by identifier.
    async fn find_instrument(
        &self,
        instrument_id: InstrumentId,
    ) -> AppResult<Option<Instrument>>;

    /// Moves one instrument to a new condition and appends a log entry.
    async fn set_instrument_condition(
        &self,
        instrument_id: InstrumentId,
        condition: InstrumentCondition,
        note: &str,
    ) -> AppResult<Instrument>;

    /// Hands one instrument to an assignee.
    async fn assign_instrument(
        &self,
        instrument_id: InstrumentId,
        assignee: &str,
    ) -> AppResult<Instrument>;

    /// Takes one instrument back from its holder.
    async fn unassign_instrument(&self, instrument_id: InstrumentId) -> AppResult<Instrument>;
}
