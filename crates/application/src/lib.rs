//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod inventory_ports;
mod inventory_service;

pub use authorization_service::{AuthorizationService, RolePermissionTable};
pub use inventory_ports::{InstrumentListFilter, InventoryRepository};
pub use inventory_service::InventoryService;
