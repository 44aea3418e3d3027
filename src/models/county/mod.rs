pub mod county;

pub use county::{County, CreateCountyRequest, UpdateCountyRequest};
