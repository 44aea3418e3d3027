use uuid::Uuid;

use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Appointment, CompleteAppointmentRequest, CreateAppointmentRequest, UpdateAppointmentRequest,
};

/// Books an appointment for an existing user. New appointments start pending.
pub async fn create_appointment<S: Store>(
    store: &S,
    payload: CreateAppointmentRequest,
) -> ApiResult<Appointment> {
    if store.find_user(payload.user).await?.is_none() {
        return Err(ApiError::NotFound("User"));
    }

    let appointment = Appointment::new(payload);
    store.insert_appointment(&appointment).await?;
    Ok(appointment)
}

/// Overwrites time, date and place; owner and completion are untouched.
pub async fn update_appointment<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdateAppointmentRequest,
) -> ApiResult<Appointment> {
    store
        .update_appointment_details(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Appointment"))
}

pub async fn set_completed<S: Store>(
    store: &S,
    payload: CompleteAppointmentRequest,
) -> ApiResult<Appointment> {
    store
        .set_appointment_completed(payload.id, payload.completed)
        .await?
        .ok_or(ApiError::NotFound("Appointment"))
}
