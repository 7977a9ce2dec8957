use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::{generations, media, sessions, AppState};

use super::controller;

/// Attribute values are short strings; anything larger is rejected with 413.
pub static BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(controller::get_root))
        // generations
        .route("/shots", get(generations::controller::get_shots))
        // sessions
        .route("/sessions", post(sessions::controller::create_session))
        .route("/sessions/:id", get(sessions::controller::get_session_by_id))
        .route(
            "/sessions/:id/attributes",
            patch(sessions::controller::update_attribute),
        )
        .route(
            "/sessions/:id/submit",
            post(sessions::controller::submit_session),
        )
        .route("/sessions/:id/reset", post(sessions::controller::reset_session))
        // media
        .route(
            "/sessions/:id/shots/:shot/prompt",
            get(media::controller::get_shot_prompt),
        )
        .route(
            "/sessions/:id/shots/:shot/image",
            get(media::controller::get_shot_image),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
