use derive_more::Display;

/// Collaborator failures shared by every route: payload validation, the
/// document store, outbound email, password hashing and session-token
/// minting.
#[derive(Debug, Display)]
pub enum CommonError {
    Validation(validator::ValidationErrors),
    Database(surrealdb::Error),
    Email(resend_rs::Error),
    Hashing(argon2::password_hash::Error),
    Token(jsonwebtoken::errors::Error),
}
