// src/models/mod.rs

pub mod app;
pub mod appointments;
pub mod county;
pub mod database;
pub mod site;
pub mod users;

pub use app::AppState;
pub use appointments::{
    Appointment, CompleteAppointmentRequest, CreateAppointmentRequest, PopulatedAppointment,
    UpdateAppointmentRequest,
};
pub use county::{County, CreateCountyRequest, UpdateCountyRequest};
pub use database::Session;
pub use site::{Site, SiteRequest};
pub use users::{LoginRequest, RegisterRequest, User, UserResponse};
