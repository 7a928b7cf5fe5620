//! Transport payloads exchanged with the front-end.

pub mod inventory;

pub use inventory::{
    AdjustClothingQuantityRequest, AssignClothingRequest, AssignInstrumentRequest,
    ClothingAssignmentResponse, ClothingPoolResponse, CreateClothingPoolRequest,
    CreateInstrumentRequest, InstrumentListQuery, InstrumentResponse,
    MaintenanceLogEntryResponse, UpdateInstrumentConditionRequest,
};
