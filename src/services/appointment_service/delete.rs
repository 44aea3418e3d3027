use log::debug;
use uuid::Uuid;

use crate::db::Store;
use crate::error::ApiResult;

pub async fn delete_appointment<S: Store>(store: &S, id: Uuid) -> ApiResult<u64> {
    let removed = store.delete_appointment(id).await?;
    debug!("Deleted {removed} appointment(s) with id {id}");
    Ok(removed)
}

/// Clears a user's bookings. The account itself may already be gone.
pub async fn delete_appointments_for_user<S: Store>(store: &S, user_id: Uuid) -> ApiResult<u64> {
    Ok(store.delete_appointments_for_user(user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, Store};
    use crate::services::appointment_service::{create_appointment, fixtures};

    #[tokio::test]
    async fn removes_all_and_only_that_users_bookings() {
        let store = MemoryStore::new();
        let ada = fixtures::user(&store, "ada").await;
        let bob = fixtures::user(&store, "bob").await;
        for _ in 0..2 {
            create_appointment(&store, fixtures::request(ada.id))
                .await
                .unwrap();
        }
        let kept = create_appointment(&store, fixtures::request(bob.id))
            .await
            .unwrap();

        assert_eq!(delete_appointments_for_user(&store, ada.id).await.unwrap(), 2);
        assert_eq!(store.list_appointments().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn deleting_an_unknown_id_succeeds() {
        let store = MemoryStore::new();
        assert_eq!(delete_appointment(&store, Uuid::new_v4()).await.unwrap(), 0);
        assert_eq!(
            delete_appointments_for_user(&store, Uuid::new_v4())
                .await
                .unwrap(),
            0
        );
    }
}
