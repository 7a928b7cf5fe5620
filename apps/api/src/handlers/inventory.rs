mod clothing;
mod instruments;

pub use clothing::{
    adjust_clothing_quantity_handler, assign_clothing_handler, create_clothing_pool_handler,
    list_clothing_pools_handler, unassign_clothing_handler,
};
pub use instruments::{
    assign_instrument_handler, create_instrument_handler, list_instruments_handler,
    unassign_instrument_handler, update_instrument_condition_handler,
};
