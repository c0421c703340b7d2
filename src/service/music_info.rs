use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::MusicInfoError;
use crate::utils::date;

type Result<T> = std::result::Result<T, MusicInfoError>;

/// Client for the external music info service, which supplies the lyrics,
/// release date and link for a new song. One best-effort call per creation,
/// no retries, no caching.
#[derive(Clone)]
pub struct Service {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct SongInfo {
    #[serde(rename = "releaseDate", with = "date")]
    pub release_date: NaiveDate,
    pub text: String,
    pub link: String,
}

impl Service {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build music info http client");

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    pub async fn get_song_info(
        &self,
        artist: &str,
        name: &str,
    ) -> Result<SongInfo> {
        let url = format!("{}/info", self.base_url);
        tracing::info!("Requesting song info from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("group", artist), ("song", name)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(MusicInfoError::NotFound),
            status if !status.is_success() => Err(MusicInfoError::BadStatus {
                status: status.as_u16(),
            }),
            _ => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(MusicInfoError::InvalidResponse)
            }
        }
    }
}
