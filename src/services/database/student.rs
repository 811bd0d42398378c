use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::remote::ws::Client,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::services::database::subject::Subject;
use crate::utils::crypto::generate_uuid;

/// A student account record. OTP pairs and the password hash never leave
/// the API: responses carry a [`StudentSummary`] instead.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Student {
    pub id: Thing,
    pub email: String,

    pub password_hash: Option<String>,
    pub google_id: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub other_name: Option<String>,
    pub level: Option<String>,
    pub parent_guardian: Option<String>,
    pub profile_picture: Option<String>,

    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub has_paid: bool,

    pub signup_otp: Option<String>,
    pub signup_otp_expires_at: Option<Datetime>,
    pub forgot_password_otp: Option<String>,
    pub forgot_password_otp_expires_at: Option<Datetime>,

    #[serde(default)]
    pub subjects: Vec<Thing>,

    pub created_at: Datetime,
}

impl Student {
    /// Record key without the table prefix, as embedded in session tokens.
    pub fn key(&self) -> String {
        self.id.id.to_raw()
    }

    pub fn signup_otp_expiry(&self) -> Option<DateTime<Utc>> {
        self.signup_otp_expires_at.clone().map(|datetime| datetime.0)
    }

    pub fn forgot_password_otp_expiry(&self) -> Option<DateTime<Utc>> {
        self.forgot_password_otp_expires_at
            .clone()
            .map(|datetime| datetime.0)
    }
}

/// The shape of a student in any API response. `id` is the bare record
/// key, the same form the session carries and the update/delete paths
/// accept, so clients can echo it back untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentSummary {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub other_name: Option<String>,
    pub level: Option<String>,
    pub parent_guardian: Option<String>,
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub has_paid: bool,
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        StudentSummary {
            id: student.key(),
            email: student.email,
            first_name: student.first_name,
            last_name: student.last_name,
            other_name: student.other_name,
            level: student.level,
            parent_guardian: student.parent_guardian,
            profile_picture: student.profile_picture,
            is_verified: student.is_verified,
            has_paid: student.has_paid,
        }
    }
}

/// Profile fields a student may set at registration or change later.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub other_name: Option<String>,
    pub level: Option<String>,
    pub parent_guardian: Option<String>,
    pub profile_picture: Option<String>,
}

/// Student record joined with its resolved subject links, for the
/// payment-gated listing.
#[derive(Deserialize, Debug, Clone)]
pub struct StudentSubjects {
    pub id: Thing,
    #[serde(default)]
    pub has_paid: bool,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Serialize, Debug, Clone)]
struct NewStudent {
    email: String,
    google_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    profile_picture: Option<String>,
    is_verified: bool,
    has_paid: bool,
    subjects: Vec<Thing>,
    created_at: Datetime,
}

#[derive(Clone)]
pub struct StudentQuery<'a> {
    db: &'a Surreal<Client>,
}

impl<'a> StudentQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Client>) -> Self {
        Self { db }
    }

    fn record(student_id: &str) -> Thing {
        Thing::from(("student", student_id))
    }
}

impl<'a> StudentQuery<'a> {
    pub async fn get(&self, student_id: String) -> Result<Option<Student>, surrealdb::Error> {
        let student: Option<Student> = self.db.select(("student", student_id)).await?;

        Ok(student)
    }

    pub async fn get_by_email(&self, email: String) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM student
            WHERE email = $email
        "#;

        let mut response: surrealdb::Response = self.db.query(query).bind(("email", email)).await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    /// Creates a bare account holding only the normalized email, the state
    /// a half-completed registration leaves behind.
    pub async fn create_shell(&self, email: String) -> Result<Option<Student>, surrealdb::Error> {
        let student: Option<Student> = self
            .db
            .create(("student", generate_uuid()))
            .content(NewStudent {
                email,
                google_id: None,
                first_name: None,
                last_name: None,
                profile_picture: None,
                is_verified: false,
                has_paid: false,
                subjects: Vec::new(),
                created_at: Datetime::from(Utc::now()),
            })
            .await?;

        Ok(student)
    }

    /// Auto-provisions a passwordless account from a verified Google
    /// identity.
    pub async fn create_from_google(
        &self,
        email: String,
        google_id: String,
        first_name: Option<String>,
        last_name: Option<String>,
        profile_picture: Option<String>,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let student: Option<Student> = self
            .db
            .create(("student", generate_uuid()))
            .content(NewStudent {
                email,
                google_id: Some(google_id),
                first_name,
                last_name,
                profile_picture,
                is_verified: false,
                has_paid: false,
                subjects: Vec::new(),
                created_at: Datetime::from(Utc::now()),
            })
            .await?;

        Ok(student)
    }

    /// Fills in profile, credential, subject links and the freshly issued
    /// signup OTP in one update. Also the path that completes a shell or
    /// Google-provisioned account.
    pub async fn complete_registration(
        &self,
        student_id: String,
        profile: StudentProfile,
        password_hash: String,
        subjects: Vec<Thing>,
        signup_otp: String,
        expires_at: Datetime,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                first_name = $first_name,
                last_name = $last_name,
                other_name = $other_name,
                level = $level,
                parent_guardian = $parent_guardian,
                profile_picture = $profile_picture,
                password_hash = $password_hash,
                subjects = $subjects,
                signup_otp = $signup_otp,
                signup_otp_expires_at = $signup_otp_expires_at
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("first_name", profile.first_name))
            .bind(("last_name", profile.last_name))
            .bind(("other_name", profile.other_name))
            .bind(("level", profile.level))
            .bind(("parent_guardian", profile.parent_guardian))
            .bind(("profile_picture", profile.profile_picture))
            .bind(("password_hash", password_hash))
            .bind(("subjects", subjects))
            .bind(("signup_otp", signup_otp))
            .bind(("signup_otp_expires_at", expires_at))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    pub async fn set_signup_otp(
        &self,
        student_id: String,
        code: String,
        expires_at: Datetime,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                signup_otp = $code,
                signup_otp_expires_at = $expires_at
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("code", code))
            .bind(("expires_at", expires_at))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    /// Flips the verification flag and clears the OTP pair in the same
    /// atomic update. The `WHERE` clause compares against the submitted
    /// code, so of two concurrent submissions only one consumes it; the
    /// loser gets no row back.
    pub async fn consume_signup_otp(
        &self,
        student_id: String,
        code: String,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                is_verified = true,
                signup_otp = NONE,
                signup_otp_expires_at = NONE
            WHERE signup_otp = $code
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("code", code))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    pub async fn set_forgot_password_otp(
        &self,
        student_id: String,
        code: String,
        expires_at: Datetime,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                forgot_password_otp = $code,
                forgot_password_otp_expires_at = $expires_at
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("code", code))
            .bind(("expires_at", expires_at))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    /// Stores the new hash and consumes the reset OTP pair atomically,
    /// guarded by the submitted code the same way as
    /// [`Self::consume_signup_otp`].
    pub async fn reset_password(
        &self,
        student_id: String,
        password_hash: String,
        code: String,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                password_hash = $password_hash,
                forgot_password_otp = NONE,
                forgot_password_otp_expires_at = NONE
            WHERE forgot_password_otp = $code
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("password_hash", password_hash))
            .bind(("code", code))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    pub async fn update_profile(
        &self,
        student_id: String,
        profile: StudentProfile,
    ) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                first_name = $first_name,
                last_name = $last_name,
                other_name = $other_name,
                level = $level,
                parent_guardian = $parent_guardian,
                profile_picture = $profile_picture
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .bind(("first_name", profile.first_name))
            .bind(("last_name", profile.last_name))
            .bind(("other_name", profile.other_name))
            .bind(("level", profile.level))
            .bind(("parent_guardian", profile.parent_guardian))
            .bind(("profile_picture", profile.profile_picture))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    pub async fn mark_paid(&self, student_id: String) -> Result<Option<Student>, surrealdb::Error> {
        let query = r#"
            UPDATE $student SET
                has_paid = true
            RETURN AFTER
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .await?;

        let students: Vec<Student> = response.take(0)?;

        Ok(students.into_iter().next())
    }

    pub async fn delete(&self, student_id: String) -> Result<Option<Student>, surrealdb::Error> {
        let student: Option<Student> = self.db.delete(("student", student_id)).await?;

        Ok(student)
    }

    /// Loads the student with its subject links resolved into full
    /// subject documents.
    pub async fn get_with_subjects(
        &self,
        student_id: String,
    ) -> Result<Option<StudentSubjects>, surrealdb::Error> {
        let query = r#"
            SELECT id, has_paid, subjects FROM $student
            FETCH subjects
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("student", Self::record(&student_id)))
            .await?;

        let students: Vec<StudentSubjects> = response.take(0)?;

        Ok(students.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn student(key: &str) -> Student {
        Student {
            id: Thing::from(("student", key)),
            email: String::from("ada@example.com"),
            password_hash: Some(String::from("$argon2id$stub")),
            google_id: None,
            first_name: Some(String::from("Ada")),
            last_name: Some(String::from("Obi")),
            other_name: None,
            level: Some(String::from("jss1")),
            parent_guardian: Some(String::from("Ngozi Obi")),
            profile_picture: None,
            is_verified: true,
            has_paid: false,
            signup_otp: Some(String::from("482913")),
            signup_otp_expires_at: None,
            forgot_password_otp: None,
            forgot_password_otp_expires_at: None,
            subjects: Vec::new(),
            created_at: Datetime::from(Utc::now()),
        }
    }

    #[test]
    fn summary_id_is_the_bare_record_key() {
        let student = student("abc123");

        assert_eq!(student.key(), "abc123");

        let summary = StudentSummary::from(student);

        // The published id must round-trip through the update/delete
        // paths, which compare it against the session's key.
        assert_eq!(summary.id, "abc123");
    }

    #[test]
    fn summary_never_carries_credentials_or_codes() {
        let summary = StudentSummary::from(student("abc123"));

        let value = serde_json::to_value(&summary).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("signup_otp"));
        assert!(!object.contains_key("forgot_password_otp"));
    }
}
