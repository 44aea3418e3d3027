// src/db/memory.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::models::{Appointment, County, Site, UpdateAppointmentRequest, User};

#[derive(Default)]
struct Tables {
    counties: Vec<County>,
    sites: Vec<Site>,
    appointments: Vec<Appointment>,
    users: Vec<User>,
}

/// Process-local store used when no database is configured, and by the tests.
///
/// Every table sits behind one lock so cascading deletes are atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn replace<T: Clone>(rows: &mut [T], record: &T, same: impl Fn(&T) -> bool) {
    if let Some(row) = rows.iter_mut().find(|row| same(row)) {
        *row = record.clone();
    }
}

fn remove_where<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> u64 {
    let before = rows.len();
    rows.retain(|row| !matches(row));
    (before - rows.len()) as u64
}

impl Store for MemoryStore {
    async fn insert_county(&self, county: &County) -> StoreResult<()> {
        self.tables.write().await.counties.push(county.clone());
        Ok(())
    }

    async fn list_counties(&self) -> StoreResult<Vec<County>> {
        Ok(self.tables.read().await.counties.clone())
    }

    async fn find_county(&self, id: Uuid) -> StoreResult<Option<County>> {
        let tables = self.tables.read().await;
        Ok(tables.counties.iter().find(|c| c.id == id).cloned())
    }

    async fn update_county(&self, county: &County) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        replace(&mut tables.counties, county, |c| c.id == county.id);
        Ok(())
    }

    async fn delete_county(&self, id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let removed = remove_where(&mut tables.counties, |c| c.id == id);
        remove_where(&mut tables.sites, |s| s.county_id == id);
        Ok(removed)
    }

    async fn insert_site(&self, site: &Site) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.counties.iter().any(|c| c.id == site.county_id) {
            return Err(StoreError::MissingParent("County"));
        }
        tables.sites.push(site.clone());
        Ok(())
    }

    async fn list_sites(&self, county_id: Uuid) -> StoreResult<Vec<Site>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sites
            .iter()
            .filter(|s| s.county_id == county_id)
            .cloned()
            .collect())
    }

    async fn find_site_by_address(
        &self,
        county_id: Uuid,
        street_address: &str,
    ) -> StoreResult<Option<Site>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sites
            .iter()
            .find(|s| s.county_id == county_id && s.street_address == street_address)
            .cloned())
    }

    async fn update_site(&self, site: &Site) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        replace(&mut tables.sites, site, |s| s.id == site.id);
        Ok(())
    }

    async fn delete_site(&self, id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(remove_where(&mut tables.sites, |s| s.id == id))
    }

    async fn delete_sites_for_county(&self, county_id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(remove_where(&mut tables.sites, |s| s.county_id == county_id))
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == appointment.user_id) {
            return Err(StoreError::MissingParent("User"));
        }
        tables.appointments.push(appointment.clone());
        Ok(())
    }

    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        Ok(self.tables.read().await.appointments.clone())
    }

    async fn list_appointments_for_user(&self, user_id: Uuid) -> StoreResult<Vec<Appointment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .appointments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        let tables = self.tables.read().await;
        Ok(tables.appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn update_appointment_details(
        &self,
        id: Uuid,
        details: &UpdateAppointmentRequest,
    ) -> StoreResult<Option<Appointment>> {
        let mut tables = self.tables.write().await;
        Ok(tables.appointments.iter_mut().find(|a| a.id == id).map(|a| {
            a.overwrite(details);
            a.clone()
        }))
    }

    async fn set_appointment_completed(
        &self,
        id: Uuid,
        completed: bool,
    ) -> StoreResult<Option<Appointment>> {
        let mut tables = self.tables.write().await;
        Ok(tables.appointments.iter_mut().find(|a| a.id == id).map(|a| {
            a.completed = completed;
            a.clone()
        }))
    }

    async fn delete_appointment(&self, id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(remove_where(&mut tables.appointments, |a| a.id == id))
    }

    async fn delete_appointments_for_user(&self, user_id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(remove_where(&mut tables.appointments, |a| {
            a.user_id == user_id
        }))
    }

    async fn insert_user(&self, user: &User) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Ok(false);
        }
        tables.users.push(user.clone());
        Ok(true)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let removed = remove_where(&mut tables.users, |u| u.id == id);
        remove_where(&mut tables.appointments, |a| a.user_id == id);
        Ok(removed)
    }
}
