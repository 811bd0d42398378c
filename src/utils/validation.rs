use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref NUMERIC_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
}

pub fn validate_otp_format(code: &str) -> Result<(), ValidationError> {
    if !NUMERIC_ONLY.is_match(code) {
        let mut error = ValidationError::new("invalid_format");
        error.message = Some(Cow::from("The OTP must contain only numbers"));
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_code_passes() {
        assert!(validate_otp_format("482913").is_ok());
    }

    #[test]
    fn non_numeric_codes_fail() {
        assert!(validate_otp_format("48a913").is_err());
        assert!(validate_otp_format("------").is_err());
        assert!(validate_otp_format("").is_err());
    }
}
