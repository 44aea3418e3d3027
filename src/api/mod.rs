// src/api/mod.rs

pub mod extract;
pub mod handler;


use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::db::Store;
use crate::models::AppState;
use handler::{appointment, county, health_check, site, users};

/// Builds the full `/api` surface over the given store.
pub fn create_router<S: Store>(state: AppState<S>) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route(
            "/county",
            post(county::create_county::<S>).get(county::list_counties::<S>),
        )
        .route(
            "/county/{id}",
            put(county::update_county::<S>).delete(county::delete_county::<S>),
        )
        .route(
            "/county/{county_id}/site",
            post(site::create_site::<S>)
                .get(site::list_sites::<S>)
                .delete(site::delete_sites::<S>),
        )
        .route(
            "/county/{county_id}/site/{site_address}",
            put(site::update_site::<S>).delete(site::delete_site::<S>),
        )
        .route(
            "/appointment",
            post(appointment::create_appointment::<S>)
                .get(appointment::list_appointments::<S>)
                .put(appointment::set_completed::<S>),
        )
        .route(
            "/appointment/{id}",
            get(appointment::list_user_appointments::<S>)
                .put(appointment::update_appointment::<S>)
                .delete(appointment::delete_appointment::<S>),
        )
        .route(
            "/appointment/random/{user_id}",
            delete(appointment::delete_user_appointments::<S>),
        )
        .nest("/users", users::routes::<S>());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
