mod delete_student;
mod fetch_subjects;
mod forgot_password;
mod google_auth;
mod login;
mod logout;
mod register;
mod send_forgot_password_otp;
mod send_signup_otp;
mod update_student;
mod verify_signup_otp;

pub use delete_student::DeleteStudentError;
pub use fetch_subjects::FetchSubjectsError;
pub use forgot_password::ForgotPasswordError;
pub use google_auth::GoogleLoginError;
pub use login::LoginError;
pub use logout::LogoutError;
pub use register::RegisterError;
pub use send_forgot_password_otp::SendForgotPasswordOtpError;
pub use send_signup_otp::SendSignupOtpError;
pub use update_student::UpdateStudentError;
pub use verify_signup_otp::VerifySignupOtpError;
