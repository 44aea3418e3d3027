use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub appointment_time: String,
    pub appointment_date: String,
    pub place_name: String,
    pub place_address: String,
    pub place_zipcode: String,
    pub place_city: String,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub completed: bool,
}

impl Appointment {
    pub fn new(payload: CreateAppointmentRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            appointment_time: payload.appointment_time,
            appointment_date: payload.appointment_date,
            place_name: payload.place_name,
            place_address: payload.place_address,
            place_zipcode: payload.place_zipcode,
            place_city: payload.place_city,
            user_id: payload.user,
            completed: false,
        }
    }

    pub fn overwrite(&mut self, details: &UpdateAppointmentRequest) {
        self.appointment_time.clone_from(&details.appointment_time);
        self.appointment_date.clone_from(&details.appointment_date);
        self.place_name.clone_from(&details.place_name);
        self.place_address.clone_from(&details.place_address);
        self.place_zipcode.clone_from(&details.place_zipcode);
        self.place_city.clone_from(&details.place_city);
    }

    /// Embeds the owning user in place of its id.
    pub fn populate(self, user: User) -> PopulatedAppointment {
        PopulatedAppointment {
            id: self.id,
            appointment_time: self.appointment_time,
            appointment_date: self.appointment_date,
            place_name: self.place_name,
            place_address: self.place_address,
            place_zipcode: self.place_zipcode,
            place_city: self.place_city,
            user,
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedAppointment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub appointment_time: String,
    pub appointment_date: String,
    pub place_name: String,
    pub place_address: String,
    pub place_zipcode: String,
    pub place_city: String,
    pub user: User,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub appointment_time: String,
    pub appointment_date: String,
    pub place_name: String,
    pub place_address: String,
    pub place_zipcode: String,
    pub place_city: String,
    pub user: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub appointment_time: String,
    pub appointment_date: String,
    pub place_name: String,
    pub place_address: String,
    pub place_zipcode: String,
    pub place_city: String,
}

/// Body of `PUT /api/appointment`; only the completion flag is touched.
#[derive(Debug, Deserialize)]
pub struct CompleteAppointmentRequest {
    pub id: Uuid,
    pub completed: bool,
}
