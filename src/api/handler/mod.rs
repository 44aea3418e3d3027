// src/api/handler/mod.rs

pub mod appointment;
pub mod county;
pub mod handler;
pub mod site;
pub mod users;

pub use handler::health_check;
