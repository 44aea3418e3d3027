pub mod cookie;
pub mod password;

pub use cookie::{clear_cookie, read_cookie, set_cookie};
pub use password::{hash_password, verify_password};
