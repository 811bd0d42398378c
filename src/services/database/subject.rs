use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::remote::ws::Client,
    sql::Thing,
    Surreal,
};

/// A subject with its playable video locations. Maintained by admin
/// tooling outside this API; students only ever read these.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subject {
    pub id: Thing,
    pub name: String,
    pub class_name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub video_urls: Vec<String>,
}

#[derive(Clone)]
pub struct SubjectQuery<'a> {
    db: &'a Surreal<Client>,
}

impl<'a> SubjectQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Client>) -> Self {
        Self { db }
    }
}

impl<'a> SubjectQuery<'a> {
    /// Subjects offered for a grade level, linked to new accounts at
    /// registration time.
    pub async fn find_by_class_name(
        &self,
        class_name: String,
    ) -> Result<Vec<Subject>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM subject
            WHERE class_name = $class_name
        "#;

        let mut response: surrealdb::Response = self
            .db
            .query(query)
            .bind(("class_name", class_name))
            .await?;

        let subjects: Vec<Subject> = response.take(0)?;

        Ok(subjects)
    }

    pub fn ids(subjects: &[Subject]) -> Vec<Thing> {
        subjects.iter().map(|subject| subject.id.clone()).collect()
    }
}
