use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::extract::{Params, Payload};
use crate::db::Store;
use crate::error::ApiResult;
use crate::models::{AppState, Site, SiteRequest};
use crate::services::site_service;

pub async fn create_site<S: Store>(
    State(state): State<AppState<S>>,
    Params(county_id): Params<Uuid>,
    Payload(payload): Payload<SiteRequest>,
) -> ApiResult<Json<Site>> {
    let site = site_service::create_site(&state.store, county_id, payload).await?;
    Ok(Json(site))
}

pub async fn list_sites<S: Store>(
    State(state): State<AppState<S>>,
    Params(county_id): Params<Uuid>,
) -> ApiResult<Json<Vec<Site>>> {
    Ok(Json(site_service::list_sites(&state.store, county_id).await?))
}

pub async fn delete_sites<S: Store>(
    State(state): State<AppState<S>>,
    Params(county_id): Params<Uuid>,
) -> ApiResult<StatusCode> {
    site_service::delete_sites(&state.store, county_id).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_site<S: Store>(
    State(state): State<AppState<S>>,
    Params((county_id, site_address)): Params<(Uuid, String)>,
) -> ApiResult<StatusCode> {
    site_service::delete_site(&state.store, county_id, &site_address).await?;
    Ok(StatusCode::OK)
}

pub async fn update_site<S: Store>(
    State(state): State<AppState<S>>,
    Params((county_id, site_address)): Params<(Uuid, String)>,
    Payload(payload): Payload<SiteRequest>,
) -> ApiResult<Json<Site>> {
    let site = site_service::update_site(&state.store, county_id, &site_address, payload).await?;
    Ok(Json(site))
}
