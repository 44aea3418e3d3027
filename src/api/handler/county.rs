use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::extract::{Params, Payload};
use crate::db::Store;
use crate::error::ApiResult;
use crate::models::{AppState, County, CreateCountyRequest, UpdateCountyRequest};
use crate::services::county_service;

pub async fn create_county<S: Store>(
    State(state): State<AppState<S>>,
    Payload(payload): Payload<CreateCountyRequest>,
) -> ApiResult<Json<County>> {
    let county = county_service::create_county(&state.store, payload).await?;
    Ok(Json(county))
}

pub async fn list_counties<S: Store>(State(state): State<AppState<S>>) -> ApiResult<Json<Vec<County>>> {
    Ok(Json(county_service::list_counties(&state.store).await?))
}

pub async fn delete_county<S: Store>(
    State(state): State<AppState<S>>,
    Params(id): Params<Uuid>,
) -> ApiResult<StatusCode> {
    county_service::delete_county(&state.store, id).await?;
    Ok(StatusCode::OK)
}

pub async fn update_county<S: Store>(
    State(state): State<AppState<S>>,
    Params(id): Params<Uuid>,
    Payload(payload): Payload<UpdateCountyRequest>,
) -> ApiResult<Json<County>> {
    let county = county_service::update_county(&state.store, id, payload).await?;
    Ok(Json(county))
}
