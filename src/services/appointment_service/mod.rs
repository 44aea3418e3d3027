// src/services/appointment_service/mod.rs

pub mod delete;
pub mod get;
pub mod set;

pub use delete::{delete_appointment, delete_appointments_for_user};
pub use get::{list_appointments, list_appointments_for_user};
pub use set::{create_appointment, set_completed, update_appointment};

#[cfg(test)]
pub(crate) mod fixtures {
    use uuid::Uuid;

    use crate::db::{MemoryStore, Store};
    use crate::models::{CreateAppointmentRequest, User};

    pub async fn user(store: &MemoryStore, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            username: username.to_string(),
            password_hash: String::new(),
            role: "user".to_string(),
        };
        store.insert_user(&user).await.unwrap();
        user
    }

    pub fn request(user: Uuid) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            appointment_time: "10:30".to_string(),
            appointment_date: "2021-04-01".to_string(),
            place_name: "Clinic".to_string(),
            place_address: "1 Main".to_string(),
            place_zipcode: "84601".to_string(),
            place_city: "Provo".to_string(),
            user,
        }
    }
}
