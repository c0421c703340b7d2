use std::num::NonZeroU64;

use chrono::NaiveDate;
use entity::song;
use serde::{Deserialize, Serialize};

use crate::model::Song;
use crate::repository::song::SongFilter;
use crate::utils::date;

/// Body of `POST /songs`. The remaining fields come from the music info
/// lookup.
#[derive(Debug, Deserialize)]
pub struct NewSongRequest {
    pub group: String,
    pub song: String,
}

/// Body of `PUT /songs/{id}` — a full replacement, every field required.
#[derive(Debug, Deserialize)]
pub struct SongPut {
    pub group: String,
    pub song: String,
    pub lyrics: String,
    #[serde(with = "date")]
    pub release_date: NaiveDate,
    pub url: String,
}

/// Body of `PATCH /songs/{id}`. Absent or empty fields leave the stored
/// value untouched.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SongPatch {
    pub group: Option<String>,
    pub song: Option<String>,
    pub lyrics: Option<String>,
    #[serde(with = "date::option")]
    pub release_date: Option<NaiveDate>,
    pub url: Option<String>,
}

impl From<SongPut> for SongPatch {
    fn from(put: SongPut) -> Self {
        Self {
            group: Some(put.group),
            song: Some(put.song),
            lyrics: Some(put.lyrics),
            release_date: Some(put.release_date),
            url: Some(put.url),
        }
    }
}

impl From<SongPut> for Song {
    fn from(put: SongPut) -> Self {
        Self {
            id: None,
            name: put.song,
            artist: put.group,
            lyrics: put.lyrics,
            release_date: put.release_date,
            url: put.url,
        }
    }
}

/// Query string of `GET /songs`. Unknown parameters are rejected.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongQuery {
    pub name: Option<String>,
    pub artist: Option<String>,
    #[serde(with = "date::option")]
    pub after: Option<NaiveDate>,
    #[serde(with = "date::option")]
    pub before: Option<NaiveDate>,
    pub page: NonZeroU64,
    pub limit: NonZeroU64,
}

impl Default for SongQuery {
    fn default() -> Self {
        Self {
            name: None,
            artist: None,
            after: None,
            before: None,
            page: NonZeroU64::new(1).unwrap(),
            limit: NonZeroU64::new(10).unwrap(),
        }
    }
}

impl SongQuery {
    pub fn into_parts(self) -> (SongFilter, u64, u64) {
        let filter = SongFilter {
            name: self.name,
            artist: self.artist,
            after: self.after,
            before: self.before,
        };

        (filter, self.page.get(), self.limit.get())
    }
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub id: i32,
    #[serde(rename = "song")]
    pub name: String,
    #[serde(rename = "group")]
    pub artist: String,
    pub lyrics: String,
    #[serde(with = "date")]
    pub release_date: NaiveDate,
    pub url: String,
}

impl From<song::Model> for SongResponse {
    fn from(model: song::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            artist: model.artist,
            lyrics: model.lyrics,
            release_date: model.release_date,
            url: model.url,
        }
    }
}
