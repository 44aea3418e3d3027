use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vaccination location. `county_id` is serialized as `county`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "county")]
    pub county_id: Uuid,
    pub city: String,
    pub street_address: String,
    pub place_name: String,
    pub zipcode: String,
}

impl Site {
    pub fn new(county_id: Uuid, payload: SiteRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            county_id,
            city: payload.city,
            street_address: payload.street_address,
            place_name: payload.place_name,
            zipcode: payload.zipcode,
        }
    }

    /// Overwrites every editable field; the owning county never changes.
    pub fn overwrite(&mut self, payload: SiteRequest) {
        self.city = payload.city;
        self.place_name = payload.place_name;
        self.zipcode = payload.zipcode;
        self.street_address = payload.street_address;
    }
}

/// Body of both the create and the update site endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRequest {
    pub city: String,
    pub street_address: String,
    pub place_name: String,
    pub zipcode: String,
}
