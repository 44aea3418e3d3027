pub mod appointment;

pub use appointment::{
    Appointment, CompleteAppointmentRequest, CreateAppointmentRequest, PopulatedAppointment,
    UpdateAppointmentRequest,
};
