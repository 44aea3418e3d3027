// src/services/site_service/mod.rs

use uuid::Uuid;

use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{County, Site, SiteRequest};

async fn require_county<S: Store>(store: &S, county_id: Uuid) -> ApiResult<County> {
    store
        .find_county(county_id)
        .await?
        .ok_or(ApiError::NotFound("County"))
}

async fn require_site<S: Store>(store: &S, county_id: Uuid, street_address: &str) -> ApiResult<Site> {
    store
        .find_site_by_address(county_id, street_address)
        .await?
        .ok_or(ApiError::NotFound("Site"))
}

fn validate(payload: &SiteRequest) -> ApiResult<()> {
    if payload.street_address.trim().is_empty() {
        return Err(ApiError::Validation(
            "streetAddress must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub async fn create_site<S: Store>(
    store: &S,
    county_id: Uuid,
    payload: SiteRequest,
) -> ApiResult<Site> {
    validate(&payload)?;
    let county = require_county(store, county_id).await?;

    let site = Site::new(county.id, payload);
    store.insert_site(&site).await?;
    Ok(site)
}

pub async fn list_sites<S: Store>(store: &S, county_id: Uuid) -> ApiResult<Vec<Site>> {
    let county = require_county(store, county_id).await?;
    Ok(store.list_sites(county.id).await?)
}

pub async fn delete_sites<S: Store>(store: &S, county_id: Uuid) -> ApiResult<u64> {
    let county = require_county(store, county_id).await?;
    Ok(store.delete_sites_for_county(county.id).await?)
}

pub async fn delete_site<S: Store>(store: &S, county_id: Uuid, street_address: &str) -> ApiResult<()> {
    let site = require_site(store, county_id, street_address).await?;
    store.delete_site(site.id).await?;
    Ok(())
}

pub async fn update_site<S: Store>(
    store: &S,
    county_id: Uuid,
    street_address: &str,
    payload: SiteRequest,
) -> ApiResult<Site> {
    validate(&payload)?;
    let mut site = require_site(store, county_id, street_address).await?;
    site.overwrite(payload);
    store.update_site(&site).await?;
    Ok(site)
}
