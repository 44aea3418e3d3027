use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Claims carried by a verified session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: Uuid,
    pub expiration_time: DateTime<Utc>,
}
