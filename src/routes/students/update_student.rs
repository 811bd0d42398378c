use axum::{extract::Path, Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{response::ApiError, routes::students::UpdateStudentError},
    extractors::AuthStudent,
    services::database::{
        student::{StudentProfile, StudentSummary},
        DatabaseLayer,
    },
};

/// Every field is optional; omitted ones keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    first_name: Option<String>,
    last_name: Option<String>,
    other_name: Option<String>,
    level: Option<String>,
    parent_guardian: Option<String>,
    profile_picture: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
    student: StudentSummary,
}

#[axum::debug_handler]
pub async fn update_student(
    auth: AuthStudent,
    Extension(database_layer): Extension<DatabaseLayer>,
    Path(student_id): Path<String>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<UpdateStudentError>> {
    // 1. Validate payload input
    payload.validate()?;

    // 2. A session only ever edits its own record
    if auth.student_id != student_id {
        return Err(ApiError(UpdateStudentError::Forbidden));
    }

    let student = database_layer
        .query()
        .student
        .get(student_id.clone())
        .await?
        .ok_or(ApiError(UpdateStudentError::NotFound))?;

    // 3. Merge the submitted fields over the stored profile
    let profile = StudentProfile {
        first_name: payload.first_name.or(student.first_name),
        last_name: payload.last_name.or(student.last_name),
        other_name: payload.other_name.or(student.other_name),
        level: payload.level.or(student.level),
        parent_guardian: payload.parent_guardian.or(student.parent_guardian),
        profile_picture: payload.profile_picture.or(student.profile_picture),
    };

    let student = database_layer
        .query()
        .student
        .update_profile(student_id, profile)
        .await?
        .ok_or(ApiError(UpdateStudentError::NotFound))?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            message: String::from("Profile updated successfully"),
            student: StudentSummary::from(student),
        }),
    ))
}
