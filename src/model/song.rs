use chrono::NaiveDate;
use entity::song;
use sea_orm::ActiveValue::{NotSet, Set};

/// A song record. `id` is `None` until the database assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: Option<i32>,
    pub name: String,
    pub artist: String,
    pub lyrics: String,
    pub release_date: NaiveDate,
    pub url: String,
}

impl From<song::Model> for Song {
    fn from(model: song::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            artist: model.artist,
            lyrics: model.lyrics,
            release_date: model.release_date,
            url: model.url,
        }
    }
}

impl From<&Song> for song::ActiveModel {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.map_or(NotSet, Set),
            name: Set(song.name.clone()),
            artist: Set(song.artist.clone()),
            lyrics: Set(song.lyrics.clone()),
            release_date: Set(song.release_date),
            url: Set(song.url.clone()),
        }
    }
}
