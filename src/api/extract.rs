// src/api/extract.rs

//! Request extractors that reject with [`ApiError`] so every bad request gets
//! the same JSON error body.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use log::debug;
use serde::de::DeserializeOwned;

use crate::db::Store;
use crate::error::ApiError;
use crate::models::{AppState, User};
use crate::services::auth_service::verify_session;
use crate::utils::read_cookie;

/// Request body accepted as JSON or as `application/x-www-form-urlencoded`.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            return Ok(Payload(value));
        }

        let bytes = axum::body::Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Payload(value))
    }
}

/// Path parameters; malformed ids become a 400.
pub struct Params<T>(pub T);

impl<T, S> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Params(value))
    }
}

/// The user behind a valid session cookie.
pub struct CurrentUser(pub User);

impl<S: Store> FromRequestParts<AppState<S>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let session = read_cookie(&parts.headers, &state.session.cookie_name)
            .and_then(|token| verify_session(&state.session, token))
            .ok_or(ApiError::Unauthorized)?;
        debug!(
            "Session for {} valid until {}",
            session.user_id, session.expiration_time
        );

        let user = state
            .store
            .find_user(session.user_id)
            .await?
            .ok_or(ApiError::Unauthorized)?;
        Ok(CurrentUser(user))
    }
}
