use entity::song;
use sea_orm::DatabaseConnection;

use crate::dto::song::SongPatch;
use crate::error::{LogErr, SongServiceError};
use crate::model::Song;
use crate::repository::song::{self as repo, SongFilter};
use crate::utils::MapInto;

type Result<T> = std::result::Result<T, SongServiceError>;

#[derive(Default, Clone)]
pub struct Service {
    database: DatabaseConnection,
}

impl Service {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Persists a new song. The input must not carry an id.
    pub async fn create_song(&self, mut song: Song) -> Result<song::Model> {
        if song.id.is_some() {
            return Err(SongServiceError::IdAlreadySet);
        }

        repo::save(&self.database, &mut song).await.log_err().map_into()
    }

    pub async fn get_song(&self, id: i32) -> Result<song::Model> {
        repo::get_by_id(&self.database, id).await.log_err().map_into()
    }

    /// Filtered, paginated listing. `page` is 1-based.
    pub async fn get_songs(
        &self,
        filter: &SongFilter,
        page: u64,
        limit: u64,
    ) -> Result<Vec<song::Model>> {
        let offset = page_offset(page, limit);

        repo::get_filtered(&self.database, filter, offset, limit)
            .await
            .log_err()
            .map_into()
    }

    /// Merges the non-empty fields of `patch` onto `existing` and saves the
    /// result. Empty strings and absent dates leave the stored value.
    pub async fn update_song(
        &self,
        existing: song::Model,
        patch: SongPatch,
    ) -> Result<song::Model> {
        let mut song = Song::from(existing);
        apply_patch(&mut song, patch);

        repo::save(&self.database, &mut song).await.log_err().map_into()
    }

    pub async fn delete_song(&self, id: i32) -> Result<()> {
        repo::delete(&self.database, id).await.log_err().map_into()
    }
}

const fn page_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

fn apply_patch(song: &mut Song, patch: SongPatch) {
    if let Some(name) = patch.song.filter(|s| !s.is_empty()) {
        song.name = name;
    }
    if let Some(artist) = patch.group.filter(|s| !s.is_empty()) {
        song.artist = artist;
    }
    if let Some(lyrics) = patch.lyrics.filter(|s| !s.is_empty()) {
        song.lyrics = lyrics;
    }
    if let Some(release_date) = patch.release_date {
        song.release_date = release_date;
    }
    if let Some(url) = patch.url.filter(|s| !s.is_empty()) {
        song.url = url;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn existing_song() -> Song {
        Song {
            id: Some(1),
            name: "Song A".to_owned(),
            artist: "Artist X".to_owned(),
            lyrics: "la la la".to_owned(),
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            url: "https://example.com/a".to_owned(),
        }
    }

    #[test]
    fn page_offset_is_zero_based() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(3, 7), 14);
    }

    #[test]
    fn page_offset_saturates_instead_of_overflowing() {
        assert_eq!(page_offset(u64::MAX, 10), u64::MAX);
        assert_eq!(page_offset(2, u64::MAX), u64::MAX);
        assert_eq!(page_offset(1, u64::MAX), 0);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut song = existing_song();
        apply_patch(&mut song, SongPatch::default());
        assert_eq!(song, existing_song());
    }

    #[test]
    fn empty_string_leaves_field_untouched() {
        let mut song = existing_song();
        apply_patch(
            &mut song,
            SongPatch {
                lyrics: Some(String::new()),
                ..SongPatch::default()
            },
        );
        assert_eq!(song.lyrics, "la la la");
    }

    #[test]
    fn set_fields_are_replaced_independently() {
        let mut song = existing_song();
        apply_patch(
            &mut song,
            SongPatch {
                lyrics: Some("X".to_owned()),
                release_date: NaiveDate::from_ymd_opt(2021, 6, 15),
                ..SongPatch::default()
            },
        );
        assert_eq!(song.lyrics, "X");
        assert_eq!(
            song.release_date,
            NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()
        );
        assert_eq!(song.artist, "Artist X");
    }
}
