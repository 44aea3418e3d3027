use log::debug;
use uuid::Uuid;

use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{RegisterRequest, User};
use crate::utils::hash_password;

pub async fn register_user<S: Store>(store: &S, payload: RegisterRequest) -> ApiResult<User> {
    let fields = [
        &payload.first_name,
        &payload.last_name,
        &payload.username,
        &payload.password,
    ];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(ApiError::Validation(
            "firstName, lastName, username and password are required".to_string(),
        ));
    }

    let password_hash = hash_password(&payload.password)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {e}")))?;

    let new_user = User {
        id: Uuid::new_v4(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        password_hash,
        role: "user".to_string(),
    };

    if !store.insert_user(&new_user).await? {
        return Err(ApiError::Forbidden("username already exists".to_string()));
    }
    Ok(new_user)
}

/// Removes an account together with its appointments.
pub async fn delete_account<S: Store>(store: &S, user_id: Uuid) -> ApiResult<u64> {
    let removed = store.delete_user(user_id).await?;
    debug!("Deleted {removed} user record(s) for {user_id}");
    Ok(removed)
}
