// src/services/auth_service/mod.rs

pub mod register_user;
pub mod session;
pub mod verify_user;

pub use register_user::{delete_account, register_user};
pub use session::{issue_session, verify_session};
pub use verify_user::verify_user_credentials;
