//! Adapters backing the application ports.

#![forbid(unsafe_code)]

mod in_memory_inventory_repository;

pub use in_memory_inventory_repository::InMemoryInventoryRepository;
