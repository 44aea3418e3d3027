use uuid::Uuid;

use crate::db::Store;
use crate::error::ApiResult;
use crate::models::{Appointment, PopulatedAppointment};

pub async fn list_appointments<S: Store>(store: &S) -> ApiResult<Vec<Appointment>> {
    Ok(store.list_appointments().await?)
}

/// A user's appointments with the user record embedded in each.
/// An unknown user simply has none.
pub async fn list_appointments_for_user<S: Store>(
    store: &S,
    user_id: Uuid,
) -> ApiResult<Vec<PopulatedAppointment>> {
    let Some(user) = store.find_user(user_id).await? else {
        return Ok(Vec::new());
    };

    let appointments = store.list_appointments_for_user(user.id).await?;
    Ok(appointments
        .into_iter()
        .map(|appointment| appointment.populate(user.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::services::appointment_service::{create_appointment, fixtures};

    #[tokio::test]
    async fn embeds_the_owner() {
        let store = MemoryStore::new();
        let ada = fixtures::user(&store, "ada").await;
        let bob = fixtures::user(&store, "bob").await;
        create_appointment(&store, fixtures::request(ada.id))
            .await
            .unwrap();
        create_appointment(&store, fixtures::request(bob.id))
            .await
            .unwrap();

        let listed = list_appointments_for_user(&store, ada.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user, ada);
        assert_eq!(list_appointments(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_user_has_no_appointments() {
        let store = MemoryStore::new();
        assert!(list_appointments_for_user(&store, Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }
}
