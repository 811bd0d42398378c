use chrono::{DateTime, Utc};

/// Issued codes stay valid this long.
pub const OTP_TTL_MINUTES: i64 = 15;

/// Outcome of checking a submitted one-time password against the stored
/// pair. A consumed pair (both fields cleared) reports `Invalid`, never
/// `Expired`, so a replayed code is indistinguishable from a wrong one.
#[derive(Debug, PartialEq, Eq)]
pub enum OtpCheck {
    Valid,
    Invalid,
    Expired,
}

/// A code is valid iff the stored pair exists, `now` is strictly before
/// the stored expiry, and the submitted code equals the stored code. The
/// expiry check runs before the comparison: a stale code fails as
/// `Expired` even when it matches.
pub fn check_otp(
    stored_code: Option<&str>,
    expires_at: Option<DateTime<Utc>>,
    submitted: &str,
    now: DateTime<Utc>,
) -> OtpCheck {
    let Some(stored_code) = stored_code else {
        return OtpCheck::Invalid;
    };

    match expires_at {
        Some(expires_at) if now < expires_at => {}
        _ => return OtpCheck::Expired,
    }

    if submitted != stored_code {
        return OtpCheck::Invalid;
    }

    OtpCheck::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn matching_code_before_expiry_is_valid() {
        let now = Utc::now();

        let check = check_otp(
            Some("482913"),
            Some(now + Duration::minutes(15)),
            "482913",
            now,
        );

        assert_eq!(check, OtpCheck::Valid);
    }

    #[test]
    fn wrong_code_is_invalid() {
        let now = Utc::now();

        let check = check_otp(
            Some("482913"),
            Some(now + Duration::minutes(15)),
            "111111",
            now,
        );

        assert_eq!(check, OtpCheck::Invalid);
    }

    #[test]
    fn expiry_wins_even_when_the_code_matches() {
        let now = Utc::now();

        let check = check_otp(
            Some("482913"),
            Some(now - Duration::seconds(1)),
            "482913",
            now,
        );

        assert_eq!(check, OtpCheck::Expired);
    }

    #[test]
    fn expiry_is_strict() {
        let now = Utc::now();

        // now == expires_at counts as expired
        let check = check_otp(Some("482913"), Some(now), "482913", now);

        assert_eq!(check, OtpCheck::Expired);
    }

    #[test]
    fn consumed_pair_rejects_replay_as_invalid() {
        let now = Utc::now();

        let check = check_otp(None, None, "482913", now);

        assert_eq!(check, OtpCheck::Invalid);
    }

    #[test]
    fn missing_expiry_is_treated_as_expired() {
        let now = Utc::now();

        let check = check_otp(Some("482913"), None, "482913", now);

        assert_eq!(check, OtpCheck::Expired);
    }
}
