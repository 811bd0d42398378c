pub const STUDENT_SCHEMA: &str = r#"
    DEFINE TABLE student SCHEMAFULL;

    DEFINE FIELD email ON TABLE student TYPE string;
    DEFINE FIELD password_hash ON TABLE student TYPE option<string | null>;
    DEFINE FIELD google_id ON TABLE student TYPE option<string | null>;

    DEFINE FIELD first_name ON TABLE student TYPE option<string | null>;
    DEFINE FIELD last_name ON TABLE student TYPE option<string | null>;
    DEFINE FIELD other_name ON TABLE student TYPE option<string | null>;
    DEFINE FIELD level ON TABLE student TYPE option<string | null>;
    DEFINE FIELD parent_guardian ON TABLE student TYPE option<string | null>;
    DEFINE FIELD profile_picture ON TABLE student TYPE option<string | null>;

    DEFINE FIELD is_verified ON TABLE student TYPE bool DEFAULT false;
    DEFINE FIELD has_paid ON TABLE student TYPE bool DEFAULT false;

    DEFINE FIELD signup_otp ON TABLE student TYPE option<string | null>;
    DEFINE FIELD signup_otp_expires_at ON TABLE student TYPE option<datetime | null>;
    DEFINE FIELD forgot_password_otp ON TABLE student TYPE option<string | null>;
    DEFINE FIELD forgot_password_otp_expires_at ON TABLE student TYPE option<datetime | null>;

    DEFINE FIELD subjects ON TABLE student TYPE array<record<subject>> DEFAULT [];
    DEFINE FIELD created_at ON TABLE student TYPE datetime;

    DEFINE INDEX student_email ON TABLE student COLUMNS email UNIQUE;
"#;

pub const SUBJECT_SCHEMA: &str = r#"
    DEFINE TABLE subject SCHEMAFULL;

    DEFINE FIELD name ON TABLE subject TYPE string;
    DEFINE FIELD class_name ON TABLE subject TYPE string;
    DEFINE FIELD title ON TABLE subject TYPE string;
    DEFINE FIELD description ON TABLE subject TYPE string;
    DEFINE FIELD video_urls ON TABLE subject TYPE array<string> DEFAULT [];
"#;
