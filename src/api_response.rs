use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Serialize, Display)]
enum Status {
    Ok,
    Err,
}

#[derive(Serialize)]
pub struct Data<T> {
    status: Status,
    data: T,
}

impl<T> Data<T>
where
    T: Serialize,
{
    pub const fn new(data: T) -> Self {
        Self {
            status: Status::Ok,
            data,
        }
    }
}

impl<T> IntoResponse for Data<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(Serialize)]
pub struct Message {
    status: Status,
    message: String,
}

impl Message {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: Status::Ok.to_string(),
        }
    }

    pub fn new(message: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Ok,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(Serialize)]
struct ErrorMessage {
    status: Status,
    message: String,
}

pub fn err(
    status: StatusCode,
    message: impl std::fmt::Display,
) -> impl IntoResponse {
    (
        status,
        Json(ErrorMessage {
            status: Status::Err,
            message: message.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_bodies_serialize_with_ok_status() {
        let message = serde_json::to_value(Message::new("Song deleted")).unwrap();
        assert_eq!(message["status"], "Ok");
        assert_eq!(message["message"], "Song deleted");

        let ok = serde_json::to_value(Message::ok()).unwrap();
        assert_eq!(ok["message"], "Ok");
    }

    #[test]
    fn err_sets_the_status_code() {
        let response = err(StatusCode::CONFLICT, "duplicate").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
