// src/services/county_service/mod.rs

use log::debug;
use uuid::Uuid;

use crate::db::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::{County, CreateCountyRequest, UpdateCountyRequest};

fn validate_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

pub async fn create_county<S: Store>(store: &S, payload: CreateCountyRequest) -> ApiResult<County> {
    validate_name(&payload.name)?;
    if payload.num_vacc_locations < 0 {
        return Err(ApiError::Validation(
            "numVaccLocations must not be negative".to_string(),
        ));
    }

    let county = County::new(payload.name, payload.num_vacc_locations);
    store.insert_county(&county).await?;
    Ok(county)
}

pub async fn list_counties<S: Store>(store: &S) -> ApiResult<Vec<County>> {
    Ok(store.list_counties().await?)
}

/// Deleting an unknown id is not an error. The county's sites go with it.
pub async fn delete_county<S: Store>(store: &S, id: Uuid) -> ApiResult<u64> {
    let removed = store.delete_county(id).await?;
    debug!("Deleted {removed} county record(s) for {id}");
    Ok(removed)
}

/// Renames a county; the location count is left alone.
pub async fn update_county<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdateCountyRequest,
) -> ApiResult<County> {
    validate_name(&payload.name)?;

    let mut county = store
        .find_county(id)
        .await?
        .ok_or(ApiError::NotFound("County"))?;
    county.name = payload.name;
    store.update_county(&county).await?;
    Ok(county)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn request(name: &str, locations: i64) -> CreateCountyRequest {
        CreateCountyRequest {
            name: name.to_string(),
            num_vacc_locations: locations,
        }
    }

    #[tokio::test]
    async fn rename_keeps_the_location_count() {
        let store = MemoryStore::new();
        let county = create_county(&store, request("Utah", 4)).await.unwrap();

        let renamed = update_county(
            &store,
            county.id,
            UpdateCountyRequest {
                name: "Salt Lake".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(renamed.name, "Salt Lake");
        assert_eq!(renamed.num_vacc_locations, 4);
        assert_eq!(list_counties(&store).await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn rejects_blank_names_and_negative_counts() {
        let store = MemoryStore::new();
        assert!(matches!(
            create_county(&store, request("  ", 1)).await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            create_county(&store, request("Utah", -1)).await,
            Err(ApiError::Validation(_))
        ));
        assert!(list_counties(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_the_county_existed() {
        let store = MemoryStore::new();
        let county = create_county(&store, request("Utah", 1)).await.unwrap();
        assert_eq!(delete_county(&store, county.id).await.unwrap(), 1);
        assert_eq!(delete_county(&store, county.id).await.unwrap(), 0);
        assert!(list_counties(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn updating_an_unknown_county_is_not_found() {
        let store = MemoryStore::new();
        let result = update_county(
            &store,
            Uuid::new_v4(),
            UpdateCountyRequest {
                name: "Nowhere".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound("County"))));
    }
}
