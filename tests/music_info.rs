use std::time::Duration;

use anyhow::Result;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use music_lib::error::MusicInfoError;
use music_lib::service::MusicInfoService;
use serde_json::json;
use tokio::net::TcpListener;

async fn serve(router: Router) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}

fn client(base: &str) -> MusicInfoService {
    MusicInfoService::new(base, Duration::from_secs(2))
}

#[tokio::test]
async fn missing_song_maps_to_not_found() -> Result<()> {
    let router =
        Router::new().route("/info", get(|| async { StatusCode::NOT_FOUND }));
    let base = serve(router).await?;

    let err = client(&base)
        .get_song_info("Artist X", "Song A")
        .await
        .unwrap_err();
    assert!(matches!(err, MusicInfoError::NotFound));
    Ok(())
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_status() -> Result<()> {
    let router = Router::new()
        .route("/info", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = serve(router).await?;

    let err = client(&base)
        .get_song_info("Artist X", "Song A")
        .await
        .unwrap_err();
    assert!(matches!(err, MusicInfoError::BadStatus { status: 503 }));
    Ok(())
}

#[tokio::test]
async fn successful_lookup_parses_the_payload() -> Result<()> {
    let router = Router::new().route(
        "/info",
        get(|| async {
            Json(json!({
                "releaseDate": "2006-07-16",
                "text": "la la la",
                "link": "https://example.com/song",
            }))
        }),
    );
    let base = serve(router).await?;

    let info = client(&base).get_song_info("Artist X", "Song A").await?;
    assert_eq!(
        info.release_date,
        NaiveDate::from_ymd_opt(2006, 7, 16).unwrap()
    );
    assert_eq!(info.text, "la la la");
    assert_eq!(info.link, "https://example.com/song");
    Ok(())
}

#[tokio::test]
async fn incomplete_payload_is_an_invalid_response() -> Result<()> {
    let router = Router::new()
        .route("/info", get(|| async { Json(json!({"text": "la la la"})) }));
    let base = serve(router).await?;

    let err = client(&base)
        .get_song_info("Artist X", "Song A")
        .await
        .unwrap_err();
    assert!(matches!(err, MusicInfoError::InvalidResponse(_)));
    Ok(())
}
