use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use uuid::Uuid;

pub async fn hash_password(password: String) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;

    Ok(password_hash.to_string())
}

pub async fn verify_password_hash(
    password: String,
    hash: String,
) -> Result<bool, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash.as_str())?;

    match argon2.verify_password(password.as_bytes(), &hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn generate_uuid() -> String {
    let new_uuid = Uuid::new_v4().simple().to_string();

    new_uuid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hash = hash_password(String::from("correct horse battery"))
            .await
            .unwrap();

        let matches = verify_password_hash(String::from("correct horse battery"), hash.clone())
            .await
            .unwrap();
        assert!(matches);

        let matches = verify_password_hash(String::from("wrong password"), hash)
            .await
            .unwrap();
        assert!(!matches);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let result = verify_password_hash(String::from("anything"), String::from("not-a-hash")).await;

        assert!(result.is_err());
    }
}
