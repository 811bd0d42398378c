pub mod cookies;
pub mod crypto;
pub mod jwt;
pub mod otp;
pub mod random;
pub mod schemas;
pub mod validation;
