use rand::{thread_rng, Rng};

/// One-time passwords are 6-digit numeric strings drawn uniformly from
/// [100000, 999999], so the first digit is never zero.
pub fn generate_otp() -> String {
    let mut rng = thread_rng();

    rng.gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_is_six_digits() {
        for _ in 0..1000 {
            let otp = generate_otp();

            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(otp.chars().next(), Some('0'));
        }
    }

    #[test]
    fn otp_stays_in_range() {
        for _ in 0..1000 {
            let value: u32 = generate_otp().parse().unwrap();

            assert!((100_000..=999_999).contains(&value));
        }
    }
}
