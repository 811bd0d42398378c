use resend_rs::{types::CreateEmailBaseOptions, Resend};

/// Outbound email collaborator. Delivery failures are reported as
/// [`resend_rs::Error`] so callers can distinguish them from storage
/// failures: the account record is already durable when a send runs.
#[derive(Clone)]
pub struct EmailLayer {
    api_key: String,
    pub domain: String,
}

impl EmailLayer {
    pub fn new(api_key: String, domain: String) -> Self {
        Self { api_key, domain }
    }

    fn sender(&self) -> String {
        format!("Access2edu <noreply@{}>", &self.domain)
    }

    pub async fn send_signup_otp(
        &self,
        to: String,
        first_name: String,
        otp: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let to = [to];
        let subject = "Access2edu Email Verification OTP";

        let body = format!(
            "Welcome {},\n\nYour OTP for email verification is: {}\nThis OTP will expire in 15 minutes.",
            first_name, otp
        );

        let email = CreateEmailBaseOptions::new(self.sender(), to, subject).with_text(&body);

        let _email = resend.emails.send(email).await?;

        Ok(())
    }

    pub async fn send_forgot_password_otp(
        &self,
        to: String,
        otp: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let to = [to];
        let subject = "Access2edu Password Reset OTP";

        let body = format!(
            "Your OTP for resetting your password is: {}\nThis OTP will expire in 15 minutes.\n\nIf you did not request a password reset, you can ignore this email.",
            otp
        );

        let email = CreateEmailBaseOptions::new(self.sender(), to, subject).with_text(&body);

        let _email = resend.emails.send(email).await?;

        Ok(())
    }
}
