pub mod student;
pub mod subject;

use surrealdb::{
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
    Surreal,
};

#[derive(Clone)]
pub struct DatabaseQuery<'a> {
    pub student: student::StudentQuery<'a>,
    pub subject: subject::SubjectQuery<'a>,
}

/// Cloneable handle over the shared database connection. Credentials
/// are only needed to open it, so only the connection itself is kept.
#[derive(Clone)]
pub struct DatabaseLayer {
    pub db: Surreal<Client>,
}

impl DatabaseLayer {
    pub async fn new(
        username: String,
        password: String,
        url: String,
        namespace: String,
        database: String,
    ) -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<Ws>(url.clone()).await?;

        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;

        db.use_ns(namespace.clone())
            .use_db(database.clone())
            .await?;

        tracing::info!(%url, %namespace, %database, "connected to the database");

        Ok(Self { db })
    }

    pub async fn initialize_schemas(&self, schemas: Vec<&str>) -> Result<(), surrealdb::Error> {
        for schema_query in schemas {
            self.db.query(schema_query).await?;
        }

        Ok(())
    }

    pub fn query(&self) -> DatabaseQuery {
        DatabaseQuery {
            student: student::StudentQuery::new(&self.db),
            subject: subject::SubjectQuery::new(&self.db),
        }
    }
}
