use std::str::FromStr;

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use kapelle_application::InstrumentListFilter;
use kapelle_domain::{ActorIdentity, InstrumentCondition, InstrumentId};
use uuid::Uuid;

use crate::dto::{
    AssignInstrumentRequest, CreateInstrumentRequest, InstrumentListQuery, InstrumentResponse,
    UpdateInstrumentConditionRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_instruments_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Query(query): Query<InstrumentListQuery>,
) -> ApiResult<Json<Vec<InstrumentResponse>>> {
    let condition = query
        .condition
        .as_deref()
        .map(InstrumentCondition::from_str)
        .transpose()?;

    let instruments = state
        .inventory_service
        .list_instruments(
            &actor,
            InstrumentListFilter {
                condition,
                instrument_type: query.instrument_type,
            },
        )
        .await?
        .into_iter()
        .map(InstrumentResponse::from)
        .collect();

    Ok(Json(instruments))
}

pub async fn create_instrument_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<CreateInstrumentRequest>,
) -> ApiResult<(StatusCode, Json<InstrumentResponse>)> {
    let instrument = state
        .inventory_service
        .create_instrument(
            &actor,
            payload.name,
            payload.instrument_type,
            payload.unique_code,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(InstrumentResponse::from(instrument))))
}

pub async fn update_instrument_condition_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(instrument_id): Path<Uuid>,
    Json(payload): Json<UpdateInstrumentConditionRequest>,
) -> ApiResult<Json<InstrumentResponse>> {
    let condition = InstrumentCondition::from_str(payload.condition.as_str())?;

    let instrument = state
        .inventory_service
        .set_instrument_condition(
            &actor,
            InstrumentId::from_uuid(instrument_id),
            condition,
            payload.note.as_str(),
        )
        .await?;

    Ok(Json(InstrumentResponse::from(instrument)))
}

pub async fn assign_instrument_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(instrument_id): Path<Uuid>,
    Json(payload): Json<AssignInstrumentRequest>,
) -> ApiResult<Json<InstrumentResponse>> {
    let instrument = state
        .inventory_service
        .assign_instrument(
            &actor,
            InstrumentId::from_uuid(instrument_id),
            payload.assignee.as_str(),
        )
        .await?;

    Ok(Json(InstrumentResponse::from(instrument)))
}

pub async fn unassign_instrument_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(instrument_id): Path<Uuid>,
) -> ApiResult<Json<InstrumentResponse>> {
    let instrument = state
        .inventory_service
        .unassign_instrument(&actor, InstrumentId::from_uuid(instrument_id))
        .await?;

    Ok(Json(InstrumentResponse::from(instrument)))
}
