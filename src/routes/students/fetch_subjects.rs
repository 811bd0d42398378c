use axum::{extract::Path, Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, routes::students::FetchSubjectsError},
    extractors::AuthStudent,
    services::database::{subject::Subject, DatabaseLayer},
};

/// What an unpaid account sees of a subject: enough to browse, nothing
/// playable.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubjectPreview {
    name: String,
    class_name: String,
    title: String,
    description: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubjectDetail {
    name: String,
    class_name: String,
    title: String,
    description: String,
    video_urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SubjectListing {
    Preview(Vec<SubjectPreview>),
    Detail(Vec<SubjectDetail>),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
    page: u32,
    limit: u32,
    subjects: SubjectListing,
}

fn paginate(subjects: &[Subject], page: u32, limit: u32) -> &[Subject] {
    let skip = ((page - 1) as usize).saturating_mul(limit as usize);

    if skip >= subjects.len() {
        return &[];
    }

    let end = skip.saturating_add(limit as usize).min(subjects.len());

    &subjects[skip..end]
}

/// Payment gates the shape of the listing, not access to it.
fn shape_subjects(subjects: &[Subject], has_paid: bool) -> SubjectListing {
    if has_paid {
        SubjectListing::Detail(
            subjects
                .iter()
                .map(|subject| SubjectDetail {
                    name: subject.name.clone(),
                    class_name: subject.class_name.clone(),
                    title: subject.title.clone(),
                    description: subject.description.clone(),
                    video_urls: subject.video_urls.clone(),
                })
                .collect(),
        )
    } else {
        SubjectListing::Preview(
            subjects
                .iter()
                .map(|subject| SubjectPreview {
                    name: subject.name.clone(),
                    class_name: subject.class_name.clone(),
                    title: subject.title.clone(),
                    description: subject.description.clone(),
                })
                .collect(),
        )
    }
}

#[axum::debug_handler]
pub async fn fetch_subjects(
    auth: AuthStudent,
    Extension(database_layer): Extension<DatabaseLayer>,
    Path((page, limit)): Path<(u32, u32)>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<FetchSubjectsError>> {
    // 1. Pages and limits are 1-based
    if page < 1 || limit < 1 {
        return Err(ApiError(FetchSubjectsError::InvalidPagination));
    }

    // 2. Load the account with its subject links resolved
    let student = database_layer
        .query()
        .student
        .get_with_subjects(auth.student_id)
        .await?
        .ok_or(ApiError(FetchSubjectsError::NotFound))?;

    let window = paginate(&student.subjects, page, limit);

    if window.is_empty() {
        return Err(ApiError(FetchSubjectsError::NoMoreResults));
    }

    // 3. Shape the window by payment status
    let subjects = shape_subjects(window, student.has_paid);

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            success: true,
            page,
            limit,
            subjects,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use surrealdb::sql::Thing;

    use super::*;

    fn subject(name: &str) -> Subject {
        Subject {
            id: Thing::from(("subject", name)),
            name: String::from(name),
            class_name: String::from("jss1"),
            title: format!("{} for JSS1", name),
            description: format!("Introductory {}", name),
            video_urls: vec![format!("https://videos.example/{}/1.mp4", name)],
        }
    }

    #[test]
    fn unpaid_listing_has_no_video_urls() {
        let subjects = vec![subject("mathematics"), subject("english")];

        let listing = shape_subjects(&subjects, false);

        let value = serde_json::to_value(&listing).unwrap();
        let first = &value.as_array().unwrap()[0];

        assert!(first.get("video_urls").is_none());
        assert_eq!(first["name"], "mathematics");
        assert_eq!(first["description"], "Introductory mathematics");
    }

    #[test]
    fn paid_listing_includes_video_urls() {
        let subjects = vec![subject("mathematics")];

        let listing = shape_subjects(&subjects, true);

        let value = serde_json::to_value(&listing).unwrap();
        let first = &value.as_array().unwrap()[0];

        assert_eq!(
            first["video_urls"][0],
            "https://videos.example/mathematics/1.mp4"
        );
    }

    #[test]
    fn pagination_windows_the_list() {
        let subjects: Vec<Subject> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| subject(name))
            .collect();

        let window = paginate(&subjects, 2, 2);

        assert_eq!(window.len(), 2);
        assert_eq!(window[0].name, "c");
        assert_eq!(window[1].name, "d");
    }

    #[test]
    fn last_partial_page_is_returned() {
        let subjects: Vec<Subject> = ["a", "b", "c"].iter().map(|name| subject(name)).collect();

        let window = paginate(&subjects, 2, 2);

        assert_eq!(window.len(), 1);
        assert_eq!(window[0].name, "c");
    }

    #[test]
    fn page_beyond_the_end_is_empty() {
        let subjects = vec![subject("a")];

        assert!(paginate(&subjects, 3, 10).is_empty());
        assert!(paginate(&[], 1, 10).is_empty());
    }
}
