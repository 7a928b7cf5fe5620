use kapelle_application::InventoryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub inventory_service: InventoryService,
}
