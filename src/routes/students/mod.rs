pub mod delete_student;
pub mod fetch_subjects;
pub mod forgot_password;
pub mod google_auth;
pub mod login;
pub mod logout;
pub mod register;
pub mod send_forgot_password_otp;
pub mod send_signup_otp;
pub mod update_student;
pub mod verify_signup_otp;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub use delete_student::delete_student;
pub use fetch_subjects::fetch_subjects;
pub use forgot_password::forgot_password;
pub use google_auth::google_auth;
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use send_forgot_password_otp::send_forgot_password_otp;
pub use send_signup_otp::send_signup_otp;
pub use update_student::update_student;
pub use verify_signup_otp::verify_signup_otp;

pub fn students_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/google-auth", post(google_auth))
        .route("/send-signup-otp", post(send_signup_otp))
        .route("/verify-signup-otp", post(verify_signup_otp))
        .route("/send-forgot-password-otp", post(send_forgot_password_otp))
        .route("/forgot-password", post(forgot_password))
        .route("/get-all-subject/:page/:limit", get(fetch_subjects))
        .route("/update-student/:student_id", put(update_student))
        .route("/delete-student/:student_id", delete(delete_student))
}
