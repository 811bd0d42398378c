pub mod database;
pub mod email;
pub mod google;
pub mod payment;
