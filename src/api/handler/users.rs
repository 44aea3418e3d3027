use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    routing::{delete, post},
    Json, Router,
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::api::extract::{CurrentUser, Params, Payload};
use crate::config::SessionConfig;
use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{AppState, LoginRequest, RegisterRequest, User, UserResponse};
use crate::services::auth_service;
use crate::utils::{clear_cookie, set_cookie};

pub fn routes<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/",
            post(register::<S>).get(current_user).delete(logout::<S>),
        )
        .route("/login", post(login::<S>))
        .route("/{id}", delete(delete_account::<S>))
}

fn start_session(config: &SessionConfig, user: User) -> ApiResult<impl IntoResponse> {
    let token = auth_service::issue_session(config, user.id, Utc::now())?;
    let cookie = set_cookie(&config.cookie_name, &token, config.max_age, config.secure);
    Ok(([(SET_COOKIE, cookie)], Json(UserResponse { user })))
}

fn end_session(config: &SessionConfig) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(SET_COOKIE, clear_cookie(&config.cookie_name, config.secure))],
    )
}

pub async fn register<S: Store>(
    State(state): State<AppState<S>>,
    Payload(payload): Payload<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = auth_service::register_user(&state.store, payload).await?;
    info!("Registered user {}", user.username);
    start_session(&state.session, user)
}

pub async fn login<S: Store>(
    State(state): State<AppState<S>>,
    Payload(payload): Payload<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = auth_service::verify_user_credentials(&state.store, payload).await?;
    start_session(&state.session, user)
}

pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse { user })
}

pub async fn logout<S: Store>(State(state): State<AppState<S>>) -> impl IntoResponse {
    end_session(&state.session)
}

/// Only the logged-in owner may remove an account.
pub async fn delete_account<S: Store>(
    State(state): State<AppState<S>>,
    CurrentUser(user): CurrentUser,
    Params(id): Params<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if user.id != id {
        return Err(ApiError::Forbidden(
            "cannot delete another user's account".to_string(),
        ));
    }

    auth_service::delete_account(&state.store, id).await?;
    info!("Deleted account {}", user.username);
    Ok(end_session(&state.session))
}
