use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use kapelle_application::{InstrumentListFilter, InventoryRepository};
use kapelle_core::{AppError, AppResult};
use kapelle_domain::{
    ClothingPool, ClothingPoolId, Instrument, InstrumentCondition, InstrumentId,
};
use tokio::sync::{Mutex, RwLock};

#[cfg(test)]
mod tests;

/// In-memory inventory store with per-resource locking.
///
/// The outer maps are locked only to resolve or insert entries; each pool
/// or instrument carries its own mutex, held for the whole check-and-write
/// sequence of one operation. Operations on different resources never
/// contend.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    clothing_pools: RwLock<HashMap<ClothingPoolId, Arc<Mutex<ClothingPool>>>>,
    instruments: RwLock<HashMap<InstrumentId, Arc<Mutex<Instrument>>>>,
    instrument_codes: RwLock<HashMap<String, InstrumentId>>,
}

impl InMemoryInventoryRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clothing_pools: RwLock::new(HashMap::new()),
            instruments: RwLock::new(HashMap::new()),
            instrument_codes: RwLock::new(HashMap::new()),
        }
    }

    async fn clothing_entry(
        &self,
        pool_id: ClothingPoolId,
    ) -> AppResult<Arc<Mutex<ClothingPool>>> {
        self.clothing_pools
            .read()
            .await
            .get(&pool_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("clothing pool '{pool_id}' does not exist")))
    }

    async fn instrument_entry(
        &self,
        instrument_id: InstrumentId,
    ) -> AppResult<Arc<Mutex<Instrument>>> {
        self.instruments
            .read()
            .await
            .get(&instrument_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("instrument '{instrument_id}' does not exist"))
            })
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn save_clothing_pool(&self, pool: ClothingPool) -> AppResult<()> {
        let mut pools = self.clothing_pools.write().await;

        if pools.contains_key(&pool.pool_id()) {
            return Err(AppError::Conflict(format!(
                "clothing pool '{}' already exists",
                pool.pool_id()
            )));
        }

        pools.insert(pool.pool_id(), Arc::new(Mutex::new(pool)));
        Ok(())
    }

    async fn list_clothing_pools(&self) -> AppResult<Vec<ClothingPool>> {
        let entries: Vec<Arc<Mutex<ClothingPool>>> =
            self.clothing_pools.read().await.values().cloned().collect();

        let mut pools = Vec::with_capacity(entries.len());
        for entry in entries {
            pools.push(entry.lock().await.clone());
        }

        pools.sort_by(|left, right| {
            left.category()
                .as_str()
                .cmp(right.category().as_str())
                .then_with(|| left.size().as_str().cmp(right.size().as_str()))
        });

        Ok(pools)
    }

    async fn find_clothing_pool(
        &self,
        pool_id: ClothingPoolId,
    ) -> AppResult<Option<ClothingPool>> {
        let entry = self.clothing_pools.read().await.get(&pool_id).cloned();

        match entry {
            Some(entry) => Ok(Some(entry.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn adjust_clothing_quantity(
        &self,
        pool_id: ClothingPoolId,
        delta: i64,
    ) -> AppResult<ClothingPool> {
        let entry = self.clothing_entry(pool_id).await?;
        let mut pool = entry.lock().await;

        pool.adjust_total_quantity(delta)?;
        Ok(pool.clone())
    }

    async fn assign_clothing(
        &self,
        pool_id: ClothingPoolId,
        assignee: &str,
        quantity: u32,
    ) -> AppResult<ClothingPool> {
        let entry = self.clothing_entry(pool_id).await?;
        let mut pool = entry.lock().await;

        pool.assign(assignee, quantity)?;
        Ok(pool.clone())
    }

    async fn unassign_clothing(
        &self,
        pool_id: ClothingPoolId,
        assignee: &str,
    ) -> AppResult<ClothingPool> {
        let entry = self.clothing_entry(pool_id).await?;
        let mut pool = entry.lock().await;

        pool.unassign(assignee)?;
        Ok(pool.clone())
    }

    async fn save_instrument(&self, instrument: Instrument) -> AppResult<()> {
        let mut codes = self.instrument_codes.write().await;
        let mut instruments = self.instruments.write().await;

        if codes.contains_key(instrument.unique_code().as_str()) {
            return Err(AppError::Conflict(format!(
                "instrument code '{}' is already registered",
                instrument.unique_code().as_str()
            )));
        }

        if instruments.contains_key(&instrument.instrument_id()) {
            return Err(AppError::Conflict(format!(
                "instrument '{}' already exists",
                instrument.instrument_id()
            )));
        }

        codes.insert(
            instrument.unique_code().as_str().to_owned(),
            instrument.instrument_id(),
        );
        instruments.insert(
            instrument.instrument_id(),
            Arc::new(Mutex::new(instrument)),
        );
        Ok(())
    }

    async fn list_instruments(&self, filter: InstrumentListFilter) -> AppResult<Vec<Instrument>> {
        let entries: Vec<Arc<Mutex<Instrument>>> =
            self.instruments.read().await.values().cloned().collect();

        let mut instruments = Vec::with_capacity(entries.len());
        for entry in entries {
            let instrument = entry.lock().await.clone();

            let condition_matches = filter
                .condition
                .map(|condition| instrument.condition() == condition)
                .unwrap_or(true);
            let type_matches = filter
                .instrument_type
                .as_deref()
                .map(|label| instrument.instrument_type().as_str() == label)
                .unwrap_or(true);

            if condition_matches && type_matches {
                instruments.push(instrument);
            }
        }

        instruments.sort_by(|left, right| {
            left.unique_code()
                .as_str()
                .cmp(right.unique_code().as_str())
        });

        Ok(instruments)
    }

    async fn find_instrument(
        &self,
        instrument_id: InstrumentId,
    ) -> AppResult<Option<Instrument>> {
        let entry = self.instruments.read().await.get(&instrument_id).cloned();

        match entry {
            Some(entry) => Ok(Some(entry.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn set_instrument_condition(
        &self,
        instrument_id: InstrumentId,
        condition: InstrumentCondition,
        note: &str,
    ) -> AppResult<Instrument> {
        let entry = self.instrument_entry(instrument_id).await?;
        let mut instrument = entry.lock().await;

        instrument.set_condition(condition, note);
        Ok(instrument.clone())
    }

    async fn assign_instrument(
        &self,
        instrument_id: InstrumentId,
        assignee: &str,
    ) -> AppResult<Instrument> {
        let entry = self.instrument_entry(instrument_id).await?;
        let mut instrument = entry.lock().await;

        instrument.assign_to(assignee)?;
        Ok(instrument.clone())
    }

    async fn unassign_instrument(&self, instrument_id: InstrumentId) -> AppResult<Instrument> {
        let entry = self.instrument_entry(instrument_id).await?;
        let mut instrument = entry.lock().await;

        instrument.unassign()?;
        Ok(instrument.clone())
    }
}
