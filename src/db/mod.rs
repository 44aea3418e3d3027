// src/db/mod.rs

//! Storage seam. Handlers only ever see the [`Store`] trait; `main` picks the
//! Postgres pool when `DATABASE_URL` is set and the in-memory tables otherwise.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Appointment, County, Site, UpdateAppointmentRequest, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An insert referenced a county or user that no longer exists.
    #[error("{0} does not exist")]
    MissingParent(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for every record type.
///
/// Listing operations return records in insertion order. Delete operations
/// return the number of removed records and never fail on a missing id.
pub trait Store: Clone + Send + Sync + 'static {
    fn insert_county(&self, county: &County) -> impl Future<Output = StoreResult<()>> + Send;
    fn list_counties(&self) -> impl Future<Output = StoreResult<Vec<County>>> + Send;
    fn find_county(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<County>>> + Send;
    fn update_county(&self, county: &County) -> impl Future<Output = StoreResult<()>> + Send;
    /// Removes the county and all of its sites in one atomic step.
    fn delete_county(&self, id: Uuid) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Fails with [`StoreError::MissingParent`] when the county is gone.
    fn insert_site(&self, site: &Site) -> impl Future<Output = StoreResult<()>> + Send;
    fn list_sites(&self, county_id: Uuid) -> impl Future<Output = StoreResult<Vec<Site>>> + Send;
    /// First site (in insertion order) of the county at that street address.
    fn find_site_by_address(
        &self,
        county_id: Uuid,
        street_address: &str,
    ) -> impl Future<Output = StoreResult<Option<Site>>> + Send;
    fn update_site(&self, site: &Site) -> impl Future<Output = StoreResult<()>> + Send;
    fn delete_site(&self, id: Uuid) -> impl Future<Output = StoreResult<u64>> + Send;
    fn delete_sites_for_county(
        &self,
        county_id: Uuid,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Fails with [`StoreError::MissingParent`] when the user is gone.
    fn insert_appointment(
        &self,
        appointment: &Appointment,
    ) -> impl Future<Output = StoreResult<()>> + Send;
    fn list_appointments(&self) -> impl Future<Output = StoreResult<Vec<Appointment>>> + Send;
    fn list_appointments_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = StoreResult<Vec<Appointment>>> + Send;
    fn find_appointment(
        &self,
        id: Uuid,
    ) -> impl Future<Output = StoreResult<Option<Appointment>>> + Send;
    /// Rewrites time, date and place in one step; owner and completion are
    /// left to whatever the row holds at write time. `None` if the id is unknown.
    fn update_appointment_details(
        &self,
        id: Uuid,
        details: &UpdateAppointmentRequest,
    ) -> impl Future<Output = StoreResult<Option<Appointment>>> + Send;
    /// Writes only the completion flag. `None` if the id is unknown.
    fn set_appointment_completed(
        &self,
        id: Uuid,
        completed: bool,
    ) -> impl Future<Output = StoreResult<Option<Appointment>>> + Send;
    fn delete_appointment(&self, id: Uuid) -> impl Future<Output = StoreResult<u64>> + Send;
    fn delete_appointments_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Returns `false` without inserting when the username is already taken.
    fn insert_user(&self, user: &User) -> impl Future<Output = StoreResult<bool>> + Send;
    fn find_user(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<User>>> + Send;
    fn find_user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Option<User>>> + Send;
    /// Removes the user and all of their appointments in one atomic step.
    fn delete_user(&self, id: Uuid) -> impl Future<Output = StoreResult<u64>> + Send;
}
