use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrative region that owns vaccine sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct County {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub num_vacc_locations: i64,
}

impl County {
    pub fn new(name: String, num_vacc_locations: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            num_vacc_locations,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountyRequest {
    pub name: String,
    pub num_vacc_locations: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCountyRequest {
    pub name: String,
}
