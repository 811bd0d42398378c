pub mod common;
pub mod response;
pub mod routes;
pub mod session;

pub use common::CommonError;
pub use response::{ApiError, ErrorResponse};
pub use session::SessionError;
