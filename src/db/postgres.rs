// src/db/postgres.rs

use log::info;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::models::{Appointment, County, Site, UpdateAppointmentRequest, User};

const COUNTY_COLUMNS: &str = "id, name, num_vacc_locations";
const SITE_COLUMNS: &str = "id, county_id, city, street_address, place_name, zipcode";
const APPOINTMENT_COLUMNS: &str = "id, appointment_time, appointment_date, place_name, \
     place_address, place_zipcode, place_city, user_id, completed";
const USER_COLUMNS: &str = "id, first_name, last_name, username, password_hash, role";

/// A foreign key violation on insert means the referenced row was deleted.
fn missing_parent(e: sqlx::Error, parent: &'static str) -> StoreError {
    let violated = e
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation());
    if violated {
        StoreError::MissingParent(parent)
    } else {
        StoreError::Database(e)
    }
}

/// Postgres-backed store. Cascades are enforced by `ON DELETE CASCADE` keys.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!("Connected to Postgres");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database schema is up to date");
        Ok(())
    }
}

impl Store for PgStore {
    async fn insert_county(&self, county: &County) -> StoreResult<()> {
        sqlx::query("INSERT INTO counties (id, name, num_vacc_locations) VALUES ($1, $2, $3)")
            .bind(county.id)
            .bind(&county.name)
            .bind(county.num_vacc_locations)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_counties(&self) -> StoreResult<Vec<County>> {
        let sql = format!("SELECT {COUNTY_COLUMNS} FROM counties ORDER BY created_at, id");
        Ok(sqlx::query_as::<_, County>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_county(&self, id: Uuid) -> StoreResult<Option<County>> {
        let sql = format!("SELECT {COUNTY_COLUMNS} FROM counties WHERE id = $1");
        Ok(sqlx::query_as::<_, County>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_county(&self, county: &County) -> StoreResult<()> {
        sqlx::query("UPDATE counties SET name = $2, num_vacc_locations = $3 WHERE id = $1")
            .bind(county.id)
            .bind(&county.name)
            .bind(county.num_vacc_locations)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_county(&self, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM counties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_site(&self, site: &Site) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO sites (id, county_id, city, street_address, place_name, zipcode) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(site.id)
        .bind(site.county_id)
        .bind(&site.city)
        .bind(&site.street_address)
        .bind(&site.place_name)
        .bind(&site.zipcode)
        .execute(&self.pool)
        .await
        .map_err(|e| missing_parent(e, "County"))?;
        Ok(())
    }

    async fn list_sites(&self, county_id: Uuid) -> StoreResult<Vec<Site>> {
        let sql =
            format!("SELECT {SITE_COLUMNS} FROM sites WHERE county_id = $1 ORDER BY created_at, id");
        Ok(sqlx::query_as::<_, Site>(&sql)
            .bind(county_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_site_by_address(
        &self,
        county_id: Uuid,
        street_address: &str,
    ) -> StoreResult<Option<Site>> {
        let sql = format!(
            "SELECT {SITE_COLUMNS} FROM sites WHERE county_id = $1 AND street_address = $2 \
             ORDER BY created_at, id LIMIT 1"
        );
        Ok(sqlx::query_as::<_, Site>(&sql)
            .bind(county_id)
            .bind(street_address)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_site(&self, site: &Site) -> StoreResult<()> {
        sqlx::query(
            "UPDATE sites SET city = $2, street_address = $3, place_name = $4, zipcode = $5 \
             WHERE id = $1",
        )
        .bind(site.id)
        .bind(&site.city)
        .bind(&site.street_address)
        .bind(&site.place_name)
        .bind(&site.zipcode)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_site(&self, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_sites_for_county(&self, county_id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM sites WHERE county_id = $1")
            .bind(county_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_appointment(&self, appointment: &Appointment) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO appointments (id, appointment_time, appointment_date, place_name, \
             place_address, place_zipcode, place_city, user_id, completed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(appointment.id)
        .bind(&appointment.appointment_time)
        .bind(&appointment.appointment_date)
        .bind(&appointment.place_name)
        .bind(&appointment.place_address)
        .bind(&appointment.place_zipcode)
        .bind(&appointment.place_city)
        .bind(appointment.user_id)
        .bind(appointment.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| missing_parent(e, "User"))?;
        Ok(())
    }

    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        let sql = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY created_at, id");
        Ok(sqlx::query_as::<_, Appointment>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_appointments_for_user(&self, user_id: Uuid) -> StoreResult<Vec<Appointment>> {
        let sql = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE user_id = $1 \
             ORDER BY created_at, id"
        );
        Ok(sqlx::query_as::<_, Appointment>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        let sql = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1");
        Ok(sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_appointment_details(
        &self,
        id: Uuid,
        details: &UpdateAppointmentRequest,
    ) -> StoreResult<Option<Appointment>> {
        let sql = format!(
            "UPDATE appointments SET appointment_time = $2, appointment_date = $3, \
             place_name = $4, place_address = $5, place_zipcode = $6, place_city = $7 \
             WHERE id = $1 RETURNING {APPOINTMENT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .bind(&details.appointment_time)
            .bind(&details.appointment_date)
            .bind(&details.place_name)
            .bind(&details.place_address)
            .bind(&details.place_zipcode)
            .bind(&details.place_city)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn set_appointment_completed(
        &self,
        id: Uuid,
        completed: bool,
    ) -> StoreResult<Option<Appointment>> {
        let sql = format!(
            "UPDATE appointments SET completed = $2 WHERE id = $1 RETURNING {APPOINTMENT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .bind(completed)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_appointment(&self, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_appointments_for_user(&self, user_id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM appointments WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_user(&self, user: &User) -> StoreResult<bool> {
        let result = sqlx::query(
            "INSERT INTO users (id, first_name, last_name, username, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5, $6) ON CONFLICT (username) DO NOTHING",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.role)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
