use kapelle_domain::{ClothingAssignment, ClothingPool, Instrument, MaintenanceLogEntry};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for clothing pool creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-clothing-pool-request.ts"
)]
pub struct CreateClothingPoolRequest {
    pub category: String,
    pub size: String,
    pub initial_quantity: u32,
}

/// Incoming payload for a total-quantity adjustment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/adjust-clothing-quantity-request.ts"
)]
pub struct AdjustClothingQuantityRequest {
    pub delta: i64,
}

/// Incoming payload for a clothing assignment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-clothing-request.ts"
)]
pub struct AssignClothingRequest {
    pub assignee: String,
    pub quantity: u32,
}

/// API representation of one clothing assignment record.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/clothing-assignment-response.ts"
)]
pub struct ClothingAssignmentResponse {
    pub assignee: String,
    pub quantity: u32,
}

/// API representation of a clothing pool snapshot.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/clothing-pool-response.ts"
)]
pub struct ClothingPoolResponse {
    pub pool_id: String,
    pub category: String,
    pub size: String,
    pub total_quantity: u32,
    pub in_use: u32,
    pub available: u32,
    pub assignments: Vec<ClothingAssignmentResponse>,
}

/// Incoming payload for instrument creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-instrument-request.ts"
)]
pub struct CreateInstrumentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
    pub unique_code: String,
}

/// Query filters for instrument listing.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/instrument-list-query.ts"
)]
pub struct InstrumentListQuery {
    pub condition: Option<String>,
    #[serde(rename = "type")]
    pub instrument_type: Option<String>,
}

/// Incoming payload for a condition change.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-instrument-condition-request.ts"
)]
pub struct UpdateInstrumentConditionRequest {
    pub condition: String,
    pub note: String,
}

/// Incoming payload for an instrument assignment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-instrument-request.ts"
)]
pub struct AssignInstrumentRequest {
    pub assignee: String,
}

/// API representation of one maintenance-log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/maintenance-log-entry-response.ts"
)]
pub struct MaintenanceLogEntryResponse {
    pub recorded_at: String,
    pub note: String,
}

/// API representation of an instrument snapshot.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/instrument-response.ts"
)]
pub struct InstrumentResponse {
    pub instrument_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
    pub unique_code: String,
    pub condition: String,
    pub assigned_to: Option<String>,
    pub maintenance_log: Vec<MaintenanceLogEntryResponse>,
}

impl From<&ClothingAssignment> for ClothingAssignmentResponse {
    fn from(value: &ClothingAssignment) -> Self {
        Self {
            assignee: value.assignee().as_str().to_owned(),
            quantity: value.quantity(),
        }
    }
}

impl From<ClothingPool> for ClothingPoolResponse {
    fn from(value: ClothingPool) -> Self {
        Self {
            pool_id: value.pool_id().to_string(),
            category: value.category().as_str().to_owned(),
            size: value.size().as_str().to_owned(),
            total_quantity: value.total_quantity(),
            in_use: value.in_use(),
            available: value.available(),
            assignments: value
                .assignments()
                .iter()
                .map(ClothingAssignmentResponse::from)
                .collect(),
        }
    }
}

impl From<&MaintenanceLogEntry> for MaintenanceLogEntryResponse {
    fn from(value: &MaintenanceLogEntry) -> Self {
        Self {
            recorded_at: value.recorded_at().to_rfc3339(),
            note: value.note().to_owned(),
        }
    }
}

impl From<Instrument> for InstrumentResponse {
    fn from(value: Instrument) -> Self {
        Self {
            instrument_id: value.instrument_id().to_string(),
            name: value.name().as_str().to_owned(),
            instrument_type: value.instrument_type().as_str().to_owned(),
            unique_code: value.unique_code().as_str().to_owned(),
            condition: value.condition().as_str().to_owned(),
            assigned_to: value
                .assigned_to()
                .map(|assignee| assignee.as_str().to_owned()),
            maintenance_log: value
                .maintenance_log()
                .iter()
                .map(MaintenanceLogEntryResponse::from)
                .collect(),
        }
    }
}
