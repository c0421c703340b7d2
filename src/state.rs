use std::time::Duration;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::service::config::Config;
use crate::service::database::get_db_connection;
use crate::service::{MusicInfoService, SongService};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub database: DatabaseConnection,
    pub song_service: SongService,
    pub music_info_service: MusicInfoService,
}

impl AppState {
    pub async fn init(config: &Config) -> Self {
        let database = get_db_connection(&config.database_url).await;

        Self {
            database: database.clone(),
            song_service: SongService::new(database.clone()),
            music_info_service: MusicInfoService::new(
                &config.music_info_url,
                Duration::from_secs(config.music_info_timeout_secs),
            ),
        }
    }
}
