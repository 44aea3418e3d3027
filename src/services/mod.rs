// src/services/mod.rs

pub mod appointment_service;
pub mod auth_service;
pub mod county_service;
pub mod site_service;
