use std::sync::Arc;

use kapelle_core::{AppError, AppResult};
use kapelle_domain::{
    ActorIdentity, ClothingPool, ClothingPoolId, Instrument, InstrumentCondition, InstrumentId,
    Permission,
};

use crate::AuthorizationService;
use crate::inventory_ports::{InstrumentListFilter, InventoryRepository};

mod clothing;
mod instruments;

/// Application service for the inventory ledger.
///
/// Every operation checks the actor's permission first; the ledger
/// invariants themselves are validated independently below the port, so
/// they hold even for callers that bypass this service in tests.
#[derive(Clone)]
pub struct InventoryService {
    repository: Arc<dyn InventoryRepository>,
    authorization_service: AuthorizationService,
}

impl InventoryService {
    /// Creates a new inventory service from a repository implementation.
    #[must_use]
    pub fn new(
        repository: Arc<dyn InventoryRepository>,
        authorization_service: AuthorizationService,
    ) -> Self {
        Self {
            repository,
            authorization_service,
        }
    }
}
