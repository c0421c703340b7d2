use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api_response::{self, Data, Message};
use crate::dto::song::{
    NewSongRequest, SongPatch, SongPut, SongQuery, SongResponse,
};
use crate::error::{CreateSongError, SongServiceError};
use crate::model::Song;
use crate::service::{MusicInfoService, SongService};
use crate::state::AppState;
use crate::utils::MapInto;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/songs", get(get_songs).post(create_song))
        .route(
            "/songs/{id}",
            get(get_song)
                .put(put_song)
                .patch(patch_song)
                .delete(delete_song),
        )
}

/// `POST /songs` — creates a song from `{group, song}`, enriching it with
/// metadata from the music info service.
async fn create_song(
    State(song_service): State<SongService>,
    State(music_info): State<MusicInfoService>,
    Json(request): Json<NewSongRequest>,
) -> Result<Response, CreateSongError> {
    if request.group.is_empty() || request.song.is_empty() {
        return Err(CreateSongError::EmptyField);
    }

    let info = music_info
        .get_song_info(&request.group, &request.song)
        .await?;

    let song = Song {
        id: None,
        name: request.song,
        artist: request.group,
        lyrics: info.text,
        release_date: info.release_date,
        url: info.link,
    };

    let created = song_service.create_song(song).await?;

    Ok((
        StatusCode::CREATED,
        Data::new(SongResponse::from(created)),
    )
        .into_response())
}

/// `GET /songs` — filtered, paginated listing.
async fn get_songs(
    State(service): State<SongService>,
    Query(query): Query<SongQuery>,
) -> Result<Data<Vec<SongResponse>>, SongServiceError> {
    let (filter, page, limit) = query.into_parts();
    let songs = service.get_songs(&filter, page, limit).await?;

    Ok(Data::new(songs.map_into()))
}

async fn get_song(
    State(service): State<SongService>,
    Path(id): Path<i32>,
) -> Result<Data<SongResponse>, SongServiceError> {
    let song = service.get_song(id).await?;

    Ok(Data::new(song.into()))
}

/// `PUT /songs/{id}` — full replacement; creates the song when the id does
/// not exist.
async fn put_song(
    State(service): State<SongService>,
    Path(id): Path<i32>,
    Json(request): Json<SongPut>,
) -> Result<Response, SongServiceError> {
    if request.group.is_empty() || request.song.is_empty() {
        return Ok(api_response::err(
            StatusCode::BAD_REQUEST,
            "group and song must not be empty",
        )
        .into_response());
    }

    match service.get_song(id).await {
        Ok(existing) => {
            let updated =
                service.update_song(existing, request.into()).await?;
            Ok(Data::new(SongResponse::from(updated)).into_response())
        }
        Err(SongServiceError::SongNotFound { .. }) => {
            let created = service.create_song(request.into()).await?;
            Ok((
                StatusCode::CREATED,
                Data::new(SongResponse::from(created)),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// `PATCH /songs/{id}` — merges the provided fields onto the stored song.
async fn patch_song(
    State(service): State<SongService>,
    Path(id): Path<i32>,
    Json(patch): Json<SongPatch>,
) -> Result<Data<SongResponse>, SongServiceError> {
    let existing = service.get_song(id).await?;
    let updated = service.update_song(existing, patch).await?;

    Ok(Data::new(updated.into()))
}

async fn delete_song(
    State(service): State<SongService>,
    Path(id): Path<i32>,
) -> Result<Message, SongServiceError> {
    service.delete_song(id).await?;

    Ok(Message::new("Song deleted"))
}
