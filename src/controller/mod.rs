use axum::Router;

use crate::state::AppState;

mod song;

pub fn api_router() -> Router<AppState> {
    Router::new().merge(song::router())
}
