use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::extract::{Params, Payload};
use crate::db::Store;
use crate::error::ApiResult;
use crate::models::{
    AppState, Appointment, CompleteAppointmentRequest, CreateAppointmentRequest,
    PopulatedAppointment, UpdateAppointmentRequest,
};
use crate::services::appointment_service;

pub async fn create_appointment<S: Store>(
    State(state): State<AppState<S>>,
    Payload(payload): Payload<CreateAppointmentRequest>,
) -> ApiResult<Json<Appointment>> {
    let appointment = appointment_service::create_appointment(&state.store, payload).await?;
    Ok(Json(appointment))
}

pub async fn list_appointments<S: Store>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Appointment>>> {
    Ok(Json(appointment_service::list_appointments(&state.store).await?))
}

pub async fn list_user_appointments<S: Store>(
    State(state): State<AppState<S>>,
    Params(user_id): Params<Uuid>,
) -> ApiResult<Json<Vec<PopulatedAppointment>>> {
    let appointments =
        appointment_service::list_appointments_for_user(&state.store, user_id).await?;
    Ok(Json(appointments))
}

pub async fn delete_appointment<S: Store>(
    State(state): State<AppState<S>>,
    Params(id): Params<Uuid>,
) -> ApiResult<StatusCode> {
    appointment_service::delete_appointment(&state.store, id).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_user_appointments<S: Store>(
    State(state): State<AppState<S>>,
    Params(user_id): Params<Uuid>,
) -> ApiResult<StatusCode> {
    appointment_service::delete_appointments_for_user(&state.store, user_id).await?;
    Ok(StatusCode::OK)
}

pub async fn update_appointment<S: Store>(
    State(state): State<AppState<S>>,
    Params(id): Params<Uuid>,
    Payload(payload): Payload<UpdateAppointmentRequest>,
) -> ApiResult<Json<Appointment>> {
    let appointment = appointment_service::update_appointment(&state.store, id, payload).await?;
    Ok(Json(appointment))
}

pub async fn set_completed<S: Store>(
    State(state): State<AppState<S>>,
    Payload(payload): Payload<CompleteAppointmentRequest>,
) -> ApiResult<Json<Appointment>> {
    Ok(Json(appointment_service::set_completed(&state.store, payload).await?))
}
