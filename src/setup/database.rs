use crate::services::database::DatabaseLayer;
use crate::setup::Config;
use crate::utils::schemas::{STUDENT_SCHEMA, SUBJECT_SCHEMA};

pub async fn setup_database(config: &Config) -> surrealdb::Result<DatabaseLayer> {
    let database_layer = DatabaseLayer::new(
        config.database_username.clone(),
        config.database_password.clone(),
        config.database_url.clone(),
        config.database_namespace.clone(),
        config.database_name.clone(),
    )
    .await?;

    database_layer
        .initialize_schemas(vec![STUDENT_SCHEMA, SUBJECT_SCHEMA])
        .await?;

    Ok(database_layer)
}
