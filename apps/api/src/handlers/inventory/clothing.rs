use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use kapelle_domain::{ActorIdentity, ClothingPoolId};
use uuid::Uuid;

use crate::dto::{
    AdjustClothingQuantityRequest, AssignClothingRequest, ClothingPoolResponse,
    CreateClothingPoolRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_clothing_pools_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
) -> ApiResult<Json<Vec<ClothingPoolResponse>>> {
    let pools = state
        .inventory_service
        .list_clothing_pools(&actor)
        .await?
        .into_iter()
        .map(ClothingPoolResponse::from)
        .collect();

    Ok(Json(pools))
}

pub async fn create_clothing_pool_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<CreateClothingPoolRequest>,
) -> ApiResult<(StatusCode, Json<ClothingPoolResponse>)> {
    let pool = state
        .inventory_service
        .create_clothing_pool(&actor, payload.category, payload.size, payload.initial_quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(ClothingPoolResponse::from(pool))))
}

pub async fn adjust_clothing_quantity_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<AdjustClothingQuantityRequest>,
) -> ApiResult<Json<ClothingPoolResponse>> {
    let pool = state
        .inventory_service
        .adjust_clothing_quantity(&actor, ClothingPoolId::from_uuid(pool_id), payload.delta)
        .await?;

    Ok(Json(ClothingPoolResponse::from(pool)))
}

pub async fn assign_clothing_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<AssignClothingRequest>,
) -> ApiResult<(StatusCode, Json<ClothingPoolResponse>)> {
    let pool = state
        .inventory_service
        .assign_clothing(
            &actor,
            ClothingPoolId::from_uuid(pool_id),
            payload.assignee.as_str(),
            payload.quantity,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ClothingPoolResponse::from(pool))))
}

pub async fn unassign_clothing_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path((pool_id, assignee)): Path<(Uuid, String)>,
) -> ApiResult<Json<ClothingPoolResponse>> {
    let pool = state
        .inventory_service
        .unassign_clothing(&actor, ClothingPoolId::from_uuid(pool_id), assignee.as_str())
        .await?;

    Ok(Json(ClothingPoolResponse::from(pool)))
}
