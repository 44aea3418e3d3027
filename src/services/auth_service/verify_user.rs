use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, User};
use crate::utils::verify_password;

pub async fn verify_user_credentials<S: Store>(store: &S, payload: LoginRequest) -> ApiResult<User> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "username and password are required".to_string(),
        ));
    }

    match store.find_user_by_username(&payload.username).await? {
        Some(user) if verify_password(&payload.password, &user.password_hash) => Ok(user),
        _ => Err(ApiError::Forbidden(
            "username or password is wrong".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::RegisterRequest;
    use crate::services::auth_service::register_user;

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn accepts_only_the_right_password() {
        let store = MemoryStore::new();
        let ada = register_user(
            &store,
            RegisterRequest {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                username: "ada".to_string(),
                password: "engine".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            verify_user_credentials(&store, login("ada", "engine"))
                .await
                .unwrap(),
            ada
        );
        assert!(matches!(
            verify_user_credentials(&store, login("ada", "wrong")).await,
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            verify_user_credentials(&store, login("nobody", "engine")).await,
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            verify_user_credentials(&store, login("", "")).await,
            Err(ApiError::Validation(_))
        ));
    }
}
