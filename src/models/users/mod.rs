pub mod users;

pub use users::{LoginRequest, RegisterRequest, User, UserResponse};
