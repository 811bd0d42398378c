use axum::{extract::Path, Extension, Json};
use axum_extra::extract::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, routes::students::DeleteStudentError},
    extractors::AuthStudent,
    services::database::DatabaseLayer,
    utils::cookies::{expired_cookie, GOOGLE_TOKEN_COOKIE, SESSION_COOKIE},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    message: String,
}

#[axum::debug_handler]
pub async fn delete_student(
    auth: AuthStudent,
    Extension(database_layer): Extension<DatabaseLayer>,
    Path(student_id): Path<String>,
    jar: CookieJar,
) -> Result<(CookieJar, (StatusCode, Json<RouteOutput>)), ApiError<DeleteStudentError>> {
    // 1. A session only ever deletes its own record
    if auth.student_id != student_id {
        return Err(ApiError(DeleteStudentError::Forbidden));
    }

    // 2. Remove the record
    database_layer
        .query()
        .student
        .delete(student_id)
        .await?
        .ok_or(ApiError(DeleteStudentError::NotFound))?;

    // 3. The session is gone with the account
    let jar = jar
        .add(expired_cookie(SESSION_COOKIE))
        .add(expired_cookie(GOOGLE_TOKEN_COOKIE));

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RouteOutput {
                success: true,
                message: String::from("Account deleted successfully"),
            }),
        ),
    ))
}
