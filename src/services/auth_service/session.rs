//! Session cookies carry an HS256 JWT with the user id as `sub`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    exp: i64,
}

pub fn issue_session(
    config: &SessionConfig,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> ApiResult<String> {
    let max_age = Duration::from_std(config.max_age).unwrap_or_else(|_| Duration::days(1));
    let claims = Claims {
        sub: user_id,
        exp: (now + max_age).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to sign session: {e}")))
}

/// `None` for malformed, forged or expired tokens.
pub fn verify_session(config: &SessionConfig, token: &str) -> Option<Session> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let key = DecodingKey::from_secret(config.secret.as_bytes());
    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Some(Session {
            user_id: data.claims.sub,
            expiration_time: DateTime::from_timestamp(data.claims.exp, 0)?,
        }),
        Err(e) => {
            debug!("Rejected session token: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret".to_string(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn round_trips_the_user_id() {
        let user = Uuid::new_v4();
        let now = Utc::now();
        let token = issue_session(&config(), user, now).unwrap();
        let session = verify_session(&config(), &token).unwrap();
        assert_eq!(session.user_id, user);
        assert_eq!(
            session.expiration_time.timestamp(),
            (now + Duration::days(1)).timestamp()
        );
    }

    #[test]
    fn token_is_a_standard_jwt() {
        let token = issue_session(&config(), Uuid::new_v4(), Utc::now()).unwrap();
        assert_eq!(token.split('.').count(), 3);
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn rejects_tampering_and_other_secrets() {
        let now = Utc::now();
        let mine = issue_session(&config(), Uuid::new_v4(), now).unwrap();
        let theirs = issue_session(&config(), Uuid::new_v4(), now).unwrap();

        // someone else's claims under my signature
        let mine_parts: Vec<&str> = mine.split('.').collect();
        let theirs_parts: Vec<&str> = theirs.split('.').collect();
        let forged = format!("{}.{}.{}", mine_parts[0], theirs_parts[1], mine_parts[2]);
        assert!(verify_session(&config(), &forged).is_none());

        let other = SessionConfig {
            secret: "other".to_string(),
            ..SessionConfig::default()
        };
        assert!(verify_session(&other, &mine).is_none());
        assert!(verify_session(&config(), "garbage").is_none());
    }

    #[test]
    fn expires_after_max_age() {
        let issued = Utc::now() - Duration::days(2);
        let token = issue_session(&config(), Uuid::new_v4(), issued).unwrap();
        assert!(verify_session(&config(), &token).is_none());
    }
}
