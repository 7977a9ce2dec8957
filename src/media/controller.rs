use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{app::models::api_error::ApiError, AppState};

use super::service;

pub async fn get_shot_prompt(
    State(state): State<Arc<AppState>>,
    Path((id, shot)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    match service::get_shot_prompt(&id, &shot, &state) {
        Ok(prompt) => Ok((
            [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string())],
            prompt,
        )),
        Err(e) => Err(e),
    }
}

pub async fn get_shot_image(
    State(state): State<Arc<AppState>>,
    Path((id, shot)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    match service::get_shot_image(&id, &shot, &state) {
        Ok(image) => Ok((
            [
                (header::CONTENT_TYPE, image.mime_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", image.file_name),
                ),
            ],
            image.bytes,
        )),
        Err(e) => Err(e),
    }
}
