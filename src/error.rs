use std::fmt::Debug;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_set::error_set;

use crate::api_response;

error_set! {
    RepositoryError = {
        #[display("Database error")]
        Database(sea_orm::DbErr),
        #[display("song with id {id} doesn't exist")]
        SongNotFound {
            id: i32
        },
        #[display("song {name} by {artist} already exists")]
        Duplicate {
            name: String,
            artist: String
        },
    };

    SongServiceError = {
        #[display("id must not be set for a new song")]
        IdAlreadySet,
    } || RepositoryError;

    MusicInfoError = {
        #[display("song not found in the music info service")]
        NotFound,
        #[display("music info service responded with status {status}")]
        BadStatus {
            status: u16
        },
        #[display("music info request failed")]
        Request(reqwest::Error),
        #[display("malformed music info response")]
        InvalidResponse(serde_json::Error),
    };

    CreateSongError = {
        #[display("group and song must not be empty")]
        EmptyField,
    } || MusicInfoError || SongServiceError;
}

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;
}

impl AsStatusCode for RepositoryError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SongNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for RepositoryError {
    fn into_response(self) -> axum::response::Response {
        if let Self::Database(ref db_err) = self {
            tracing::error!("Database error: {}", db_err);
        }

        api_response::err(self.as_status_code(), self.to_string())
            .into_response()
    }
}

impl AsStatusCode for SongServiceError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::IdAlreadySet => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SongNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for SongServiceError {
    fn into_response(self) -> axum::response::Response {
        if let Self::Database(ref db_err) = self {
            tracing::error!("Database error: {}", db_err);
        }

        api_response::err(self.as_status_code(), self.to_string())
            .into_response()
    }
}

impl AsStatusCode for MusicInfoError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadStatus { .. }
            | Self::Request(_)
            | Self::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MusicInfoError {
    fn into_response(self) -> axum::response::Response {
        api_response::err(self.as_status_code(), self.to_string())
            .into_response()
    }
}

impl AsStatusCode for CreateSongError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::EmptyField | Self::IdAlreadySet => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::SongNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::BadStatus { .. }
            | Self::Request(_)
            | Self::InvalidResponse(_)
            | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CreateSongError {
    fn into_response(self) -> axum::response::Response {
        if let Self::Database(ref db_err) = self {
            tracing::error!("Database error: {}", db_err);
        }

        api_response::err(self.as_status_code(), self.to_string())
            .into_response()
    }
}

pub trait LogErr {
    fn log_err(self) -> Self;
}

impl<T, E> LogErr for Result<T, E>
where
    E: Debug,
{
    fn log_err(self) -> Self {
        if let Err(ref e) = self {
            tracing::error!("{:#?}", e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_status_codes() {
        assert_eq!(
            RepositoryError::SongNotFound { id: 1 }.as_status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RepositoryError::Duplicate {
                name: "a".into(),
                artist: "b".into()
            }
            .as_status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn service_error_keeps_repository_mapping() {
        assert_eq!(
            SongServiceError::IdAlreadySet.as_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SongServiceError::SongNotFound { id: 7 }.as_status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn music_info_error_status_codes() {
        assert_eq!(
            MusicInfoError::NotFound.as_status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MusicInfoError::BadStatus { status: 503 }.as_status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
