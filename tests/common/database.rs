use std::future::Future;

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use postgresql_embedded::{PostgreSQL, Settings};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

const DB_NAME: &str = "music_lib_test";

pub struct TestDatabase {
    postgres: PostgreSQL,
    connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Result<Self> {
        let settings = Settings::default();

        let mut postgres = PostgreSQL::new(settings);
        postgres.setup().await?;
        postgres.start().await?;
        postgres.create_database(DB_NAME).await?;

        let database_url = postgres.settings().url(DB_NAME);

        let connection = create_connection(&database_url).await?;

        Migrator::up(&connection, None).await?;

        Ok(Self {
            postgres,
            connection,
        })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub async fn stop(self) -> Result<()> {
        self.postgres
            .stop()
            .await
            .context("failed to stop embedded postgres")
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let settings = self.postgres.settings();
        let _ = std::fs::remove_dir_all(&settings.data_dir);
        let _ = settings.password_file.parent().map(std::fs::remove_dir_all);
    }
}

async fn create_connection(url: &str) -> Result<DatabaseConnection> {
    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .max_connections(1)
        .to_owned();

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

pub async fn with_test_db<F, Fut>(f: F) -> Result<()>
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let db = TestDatabase::new().await?;
    let result = f(db.connection().clone()).await;
    db.stop().await?;
    result
}
