use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub async fn get_db_connection(url: &str) -> DatabaseConnection {
    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .to_owned();

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    conn
}
